use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{check_status, decode, FetchError};
use crate::models::stats::{LeetCodeStats, Platform};

const PROFILE_QUERY: &str = "query userProfile($username: String!) { \
    matchedUser(username: $username) { \
        profile { ranking } \
        submitStats { acSubmissionNum { difficulty count } } \
    } \
}";

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    username: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    matched_user: Option<MatchedUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    profile: Option<UserRanking>,
    submit_stats: SubmitStats,
}

#[derive(Deserialize)]
struct UserRanking {
    ranking: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: u32,
}

/// Fetches accepted-submission counts through LeetCode's GraphQL endpoint.
/// An unknown user comes back as `matchedUser: null`.
pub(crate) async fn fetch(
    http: &Client,
    base_url: &str,
    handle: &str,
) -> Result<LeetCodeStats, FetchError> {
    let url = format!("{}/graphql/", base_url.trim_end_matches('/'));
    let body = GraphQlRequest {
        query: PROFILE_QUERY,
        variables: Variables { username: handle },
    };

    let response = http.post(&url).json(&body).send().await?;
    let response = check_status(Platform::LeetCode, handle, response).await?;
    let parsed: GraphQlResponse = decode(Platform::LeetCode, response).await?;

    let user = parsed
        .data
        .and_then(|d| d.matched_user)
        .ok_or_else(|| FetchError::NotFound {
            platform: Platform::LeetCode,
            handle: handle.to_string(),
        })?;

    let count_for = |difficulty: &str| {
        user.submit_stats
            .ac_submission_num
            .iter()
            .find(|c| c.difficulty.eq_ignore_ascii_case(difficulty))
            .map_or(0, |c| c.count)
    };

    Ok(LeetCodeStats {
        total_solved: count_for("All"),
        easy_solved: count_for("Easy"),
        medium_solved: count_for("Medium"),
        hard_solved: count_for("Hard"),
        ranking: user.profile.and_then(|p| p.ranking),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_parses_submission_counts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql/"))
            .and(body_partial_json(json!({ "variables": { "username": "asha" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "matchedUser": {
                        "profile": { "ranking": 15234 },
                        "submitStats": {
                            "acSubmissionNum": [
                                { "difficulty": "All", "count": 212 },
                                { "difficulty": "Easy", "count": 100 },
                                { "difficulty": "Medium", "count": 90 },
                                { "difficulty": "Hard", "count": 22 }
                            ]
                        }
                    }
                }
            })))
            .mount(&server)
            .await;

        let stats = fetch(&Client::new(), &server.uri(), "asha").await.unwrap();
        assert_eq!(stats.total_solved, 212);
        assert_eq!(stats.medium_solved, 90);
        assert_eq!(stats.hard_solved, 22);
        assert_eq!(stats.ranking, Some(15234));
    }

    #[tokio::test]
    async fn test_null_user_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "matchedUser": null },
                "errors": [{ "message": "That user does not exist." }]
            })))
            .mount(&server)
            .await;

        let err = fetch(&Client::new(), &server.uri(), "nobody").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { platform: Platform::LeetCode, .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_retryable_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = fetch(&Client::new(), &server.uri(), "asha").await.unwrap_err();
        assert!(matches!(err, FetchError::Api { status: 503, .. }));
        assert!(err.is_retryable());
    }
}
