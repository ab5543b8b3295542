//! JSON-file persistence for profiles and analyses.
//!
//! One document per user and kind: `profile_<uid>.json` and
//! `analysis_<uid>.json` under the data directory. Writes go to a temp file
//! that is renamed over the target, so readers never see a partial document
//! and concurrent writers resolve as last-writer-wins.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::analysis::{AnalysisRecord, AnalysisResult};
use crate::models::profile::UserProfile;
use crate::models::user::UserId;

const PROFILE_PREFIX: &str = "profile_";
const ANALYSIS_PREFIX: &str = "analysis_";
const EXTENSION: &str = ".json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt document {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Row of the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub user_id: UserId,
    pub profile: Option<UserProfile>,
    pub analysis: Option<AnalysisResult>,
}

/// Persistence operations used by the HTTP layer. Missing documents are
/// `Ok(None)`, never an error.
#[async_trait]
pub trait ReadinessStore: Send + Sync {
    async fn save_profile(&self, user: &UserId, profile: &UserProfile) -> Result<(), StoreError>;

    async fn get_profile(&self, user: &UserId) -> Result<Option<UserProfile>, StoreError>;

    /// Makes `result` the current analysis, pushing any previous one onto
    /// the bounded history. Returns the stored record.
    async fn save_analysis(
        &self,
        user: &UserId,
        result: AnalysisResult,
    ) -> Result<AnalysisRecord, StoreError>;

    async fn get_analysis(&self, user: &UserId) -> Result<Option<AnalysisRecord>, StoreError>;

    /// Every user with a profile or an analysis, ordered by id.
    async fn list_users(&self) -> Result<Vec<UserSummary>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Opens the store, creating the data directory if needed.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .await
            .map_err(|source| StoreError::Io {
                path: data_dir.clone(),
                source,
            })?;
        Ok(Self { data_dir })
    }

    fn profile_path(&self, user: &UserId) -> PathBuf {
        self.data_dir
            .join(format!("{PROFILE_PREFIX}{}{EXTENSION}", user.as_str()))
    }

    fn analysis_path(&self, user: &UserId) -> PathBuf {
        self.data_dir
            .join(format!("{ANALYSIS_PREFIX}{}{EXTENSION}", user.as_str()))
    }

    /// User ids present on disk, mapped to (has profile, has analysis).
    async fn known_users(&self) -> Result<BTreeMap<UserId, (bool, bool)>, StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        };
        let mut users: BTreeMap<UserId, (bool, bool)> = BTreeMap::new();
        let mut entries = fs::read_dir(&self.data_dir).await.map_err(io_err)?;

        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(stem) = name.strip_suffix(EXTENSION) else {
                continue;
            };
            let (raw_id, is_profile) = if let Some(id) = stem.strip_prefix(PROFILE_PREFIX) {
                (id, true)
            } else if let Some(id) = stem.strip_prefix(ANALYSIS_PREFIX) {
                (id, false)
            } else {
                continue;
            };
            let Ok(user) = UserId::parse(raw_id) else {
                warn!("Ignoring unexpected file in data dir: {name}");
                continue;
            };
            let flags = users.entry(user).or_default();
            if is_profile {
                flags.0 = true;
            } else {
                flags.1 = true;
            }
        }
        Ok(users)
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document");
    let tmp = path.with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

    fs::write(&tmp, bytes).await.map_err(|source| StoreError::Io {
        path: tmp.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

#[async_trait]
impl ReadinessStore for JsonStore {
    async fn save_profile(&self, user: &UserId, profile: &UserProfile) -> Result<(), StoreError> {
        let path = self.profile_path(user);
        write_json(&path, profile).await?;
        debug!("Saved profile for {user}");
        Ok(())
    }

    async fn get_profile(&self, user: &UserId) -> Result<Option<UserProfile>, StoreError> {
        read_json(&self.profile_path(user)).await
    }

    async fn save_analysis(
        &self,
        user: &UserId,
        result: AnalysisResult,
    ) -> Result<AnalysisRecord, StoreError> {
        let path = self.analysis_path(user);
        let record = match read_json::<AnalysisRecord>(&path).await? {
            Some(existing) => existing.supersede(result),
            None => AnalysisRecord::new(result),
        };
        write_json(&path, &record).await?;
        debug!(
            "Saved analysis {} for {user} ({} in history)",
            record.current.id,
            record.history.len()
        );
        Ok(record)
    }

    async fn get_analysis(&self, user: &UserId) -> Result<Option<AnalysisRecord>, StoreError> {
        read_json(&self.analysis_path(user)).await
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, StoreError> {
        let mut summaries = Vec::new();
        for (user_id, (has_profile, has_analysis)) in self.known_users().await? {
            let profile = if has_profile {
                self.get_profile(&user_id).await?
            } else {
                None
            };
            let analysis = if has_analysis {
                self.get_analysis(&user_id).await?.map(|r| r.current)
            } else {
                None
            };
            summaries.push(UserSummary {
                user_id,
                profile,
                analysis,
            });
        }
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::HISTORY_LIMIT;
    use crate::models::profile::CodingHandles;
    use chrono::Utc;

    fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            display_name: Some(name.to_string()),
            email: None,
            target_role: Some("Backend Developer".to_string()),
            handles: CodingHandles {
                github: Some("asha".to_string()),
                ..Default::default()
            },
            updated_at: Utc::now(),
        }
    }

    fn analysis(final_score: u32) -> AnalysisResult {
        AnalysisResult {
            id: Uuid::new_v4(),
            resume_score: final_score,
            coding_score: final_score,
            linkedin_score: final_score,
            final_score,
            skills: vec!["Rust".to_string()],
            skill_gaps: vec![],
            recommendations: vec![],
            analysis_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_missing_documents_are_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();
        assert!(store.get_profile(&user("nobody")).await.unwrap().is_none());
        assert!(store.get_analysis(&user("nobody")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_profile_roundtrip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();
        let uid = user("u1");

        store.save_profile(&uid, &profile("Asha")).await.unwrap();
        store.save_profile(&uid, &profile("Asha K")).await.unwrap();

        let loaded = store.get_profile(&uid).await.unwrap().unwrap();
        assert_eq!(loaded.display_name.as_deref(), Some("Asha K"));
        assert!(dir.path().join("profile_u1.json").exists());
    }

    #[tokio::test]
    async fn test_history_is_newest_first_and_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();
        let uid = user("u1");

        for score in 1..=7 {
            store.save_analysis(&uid, analysis(score)).await.unwrap();
        }

        let record = store.get_analysis(&uid).await.unwrap().unwrap();
        assert_eq!(record.current.final_score, 7);
        assert_eq!(record.history.len(), HISTORY_LIMIT);
        let history: Vec<u32> = record.history.iter().map(|a| a.final_score).collect();
        assert_eq!(history, vec![6, 5, 4, 3, 2]);
    }

    #[tokio::test]
    async fn test_no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();
        store.save_analysis(&user("u1"), analysis(50)).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["analysis_u1.json".to_string()]);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("profile_u1.json"), b"{not json").unwrap();

        let err = store.get_profile(&user("u1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_list_users_joins_profiles_and_analyses() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();

        store.save_profile(&user("bob"), &profile("Bob")).await.unwrap();
        store.save_profile(&user("alice"), &profile("Alice")).await.unwrap();
        store.save_analysis(&user("alice"), analysis(40)).await.unwrap();
        store.save_analysis(&user("alice"), analysis(80)).await.unwrap();
        store.save_analysis(&user("carol"), analysis(60)).await.unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let users = store.list_users().await.unwrap();
        let ids: Vec<&str> = users.iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(ids, vec!["alice", "bob", "carol"]);

        assert_eq!(users[0].analysis.as_ref().map(|a| a.final_score), Some(80));
        assert!(users[1].analysis.is_none());
        assert!(users[2].profile.is_none());
    }
}
