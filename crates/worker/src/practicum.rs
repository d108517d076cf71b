//! Practicum status API client
//!
//! A single GET against the homework statuses endpoint. Failures are
//! classified for the loop; no retries happen at this level.

use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Homework statuses endpoint
pub const PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Status fetch failures, classified per stage
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of homework status updates
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch all status updates since the `from_date` unix timestamp
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError>;
}

/// HTTP client for the Practicum homework statuses API
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(timeout).build()?,
            endpoint,
            token,
        })
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode_body(status, &body)
    }
}

/// Classify the response: only a 200 with a JSON body yields a value
fn decode_body(status: StatusCode, body: &str) -> Result<Value, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::UnexpectedStatus(status));
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_json_body_is_decoded() {
        let value = decode_body(StatusCode::OK, r#"{"homeworks": []}"#).unwrap();
        assert!(value["homeworks"].is_array());
    }

    #[test]
    fn test_non_200_is_classified_with_its_code() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let err = decode_body(status, r#"{"homeworks": []}"#).unwrap_err();
            assert!(matches!(err, FetchError::UnexpectedStatus(code) if code == status));
        }
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let err = decode_body(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
