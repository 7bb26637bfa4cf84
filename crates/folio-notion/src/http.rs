//! Shared HTTP response helpers for Notion endpoints.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success -> [`NotionError::Api`] with the decoded Notion error
//! object) and body decoding so endpoint modules stay focused on request
//! construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::NotionError;

/// Notion's JSON error object: `{"object":"error","status":..,"code":..,"message":..}`.
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** -> [`NotionError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** -> [`NotionError::Api`] with status code and the
///   Notion error code/message, or the raw body if it is not an error object.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, NotionError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(NotionError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) => (err.code, err.message),
            Err(_) => ("unknown".to_string(), body),
        };
        return Err(NotionError::Api {
            status,
            code,
            message,
        });
    }
    Ok(resp)
}

/// Read the body and deserialize it, reporting the failing endpoint on error.
pub async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<T, NotionError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| NotionError::Parse(format!("{endpoint}: {e}")))
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            NotionError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_decodes_notion_error_object() {
        let body = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find database with ID: abc."}"#;
        let err = check_response(mock_response(404, body)).await.unwrap_err();
        match err {
            NotionError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, "object_not_found");
                assert!(message.starts_with("Could not find database"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_keeps_raw_body_when_not_json() {
        let err = check_response(mock_response(502, "Bad Gateway"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NotionError::Api { status: 502, ref code, ref message } if code == "unknown" && message == "Bad Gateway"
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn decode_reports_endpoint_on_bad_json() {
        let err = decode::<serde_json::Value>(mock_response(200, "{not json"), "databases/query")
            .await
            .unwrap_err();
        assert!(matches!(err, NotionError::Parse(ref msg) if msg.starts_with("databases/query:")));
    }
}
