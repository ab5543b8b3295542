use std::collections::HashMap;

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::warn;

use super::{check_status, decode, FetchError};
use crate::models::stats::{GitHubStats, Platform};

const TOP_LANGUAGES: usize = 5;
const RECENT_REPOS: &str = "10";

#[derive(Deserialize)]
struct GitHubUser {
    public_repos: u32,
    followers: u32,
    following: u32,
}

#[derive(Deserialize)]
struct GitHubRepo {
    #[serde(default)]
    stargazers_count: u32,
    language: Option<String>,
}

fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    let request = request.header("Accept", "application/vnd.github+json");
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Fetches the user record, then the ten most recently updated repos for
/// stars and languages. A failing repo listing degrades to zero stars and
/// no languages instead of failing the whole fetch.
pub(crate) async fn fetch(
    http: &Client,
    base_url: &str,
    token: Option<&str>,
    handle: &str,
) -> Result<GitHubStats, FetchError> {
    let base = base_url.trim_end_matches('/');

    let response = authorized(http.get(format!("{base}/users/{handle}")), token)
        .send()
        .await?;
    let response = check_status(Platform::GitHub, handle, response).await?;
    let user: GitHubUser = decode(Platform::GitHub, response).await?;

    let repos = match fetch_repos(http, base, token, handle).await {
        Ok(repos) => repos,
        Err(e) => {
            warn!("GitHub repo listing for '{handle}' failed: {e}");
            Vec::new()
        }
    };

    Ok(GitHubStats {
        public_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        total_stars: repos.iter().map(|r| r.stargazers_count).sum(),
        top_languages: top_languages(&repos),
    })
}

async fn fetch_repos(
    http: &Client,
    base: &str,
    token: Option<&str>,
    handle: &str,
) -> Result<Vec<GitHubRepo>, FetchError> {
    let request = http
        .get(format!("{base}/users/{handle}/repos"))
        .query(&[("sort", "updated"), ("per_page", RECENT_REPOS)]);
    let response = authorized(request, token).send().await?;
    let response = check_status(Platform::GitHub, handle, response).await?;
    decode(Platform::GitHub, response).await
}

/// Most frequent repo languages, ties broken alphabetically.
fn top_languages(repos: &[GitHubRepo]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        *counts.entry(language).or_default() += 1;
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_LANGUAGES)
        .map(|(language, _)| language.to_string())
        .collect()
}
