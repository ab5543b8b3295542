use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{check_status, decode, FetchError};
use crate::models::stats::{Platform, RatingStats};

#[derive(Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    result: Vec<UserInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserInfo {
    #[serde(default)]
    rating: Option<u32>,
    #[serde(default)]
    max_rating: Option<u32>,
}

/// Fetches `user.info`. Codeforces answers an unknown handle with
/// `400 {"status":"FAILED","comment":"handles: User with handle ... not found"}`.
/// Unrated users have no `rating` field and score as 0.
pub(crate) async fn fetch(
    http: &Client,
    base_url: &str,
    handle: &str,
) -> Result<RatingStats, FetchError> {
    let url = format!("{}/api/user.info", base_url.trim_end_matches('/'));
    let response = http.get(&url).query(&[("handles", handle)]).send().await?;

    if response.status() == StatusCode::BAD_REQUEST {
        let body: ApiResponse = decode(Platform::Codeforces, response).await?;
        return Err(failed(handle, body.comment));
    }
    let response = check_status(Platform::Codeforces, handle, response).await?;

    let body: ApiResponse = decode(Platform::Codeforces, response).await?;
    if body.status != "OK" {
        return Err(failed(handle, body.comment));
    }

    let user = body.result.into_iter().next().ok_or_else(|| FetchError::NotFound {
        platform: Platform::Codeforces,
        handle: handle.to_string(),
    })?;

    Ok(RatingStats {
        rating: user.rating.unwrap_or(0),
        max_rating: user.max_rating,
    })
}

fn failed(handle: &str, comment: Option<String>) -> FetchError {
    let comment = comment.unwrap_or_default();
    if comment.contains("not found") {
        FetchError::NotFound {
            platform: Platform::Codeforces,
            handle: handle.to_string(),
        }
    } else {
        FetchError::Api {
            platform: Platform::Codeforces,
            status: StatusCode::BAD_REQUEST.as_u16(),
            message: comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_parses_rating() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user.info"))
            .and(query_param("handles", "tourist"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "result": [{ "handle": "tourist", "rating": 3500, "maxRating": 3979 }]
            })))
            .mount(&server)
            .await;

        let stats = fetch(&Client::new(), &server.uri(), "tourist").await.unwrap();
        assert_eq!(stats.rating, 3500);
        assert_eq!(stats.max_rating, Some(3979));
    }

    #[tokio::test]
    async fn test_unrated_user_scores_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "result": [{ "handle": "newbie" }]
            })))
            .mount(&server)
            .await;

        let stats = fetch(&Client::new(), &server.uri(), "newbie").await.unwrap();
        assert_eq!(stats.rating, 0);
        assert_eq!(stats.max_rating, None);
    }

    #[tokio::test]
    async fn test_unknown_handle_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "status": "FAILED",
                "comment": "handles: User with handle ghost not found"
            })))
            .mount(&server)
            .await;

        let err = fetch(&Client::new(), &server.uri(), "ghost").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { platform: Platform::Codeforces, .. }));
        assert!(!err.is_retryable());
    }
}
