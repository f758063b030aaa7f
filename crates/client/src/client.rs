//! Typed HTTP client over the remote finance API.

use std::time::Duration;

use finchboard_shared::ApiError;
use finchboard_shared::config::ApiConfig;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Authenticated client for the finance API.
///
/// One instance per signed-in session; endpoint methods live in
/// [`crate::resources`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.access_token.clone(),
            http,
        })
    }

    /// The bearer token, if one is configured.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The configured API base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues an authenticated GET and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        tracing::debug!(%url, "GET");
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::MalformedResponse(err.to_string()))
    }
}

/// Passes successful responses through; maps everything else into the
/// error taxonomy, preserving the server's diagnostic body.
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(status_error(status, detail))
}

/// Maps a non-success HTTP status to an `ApiError`.
pub(crate) fn status_error(status: StatusCode, detail: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthenticated,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        _ => ApiError::ServerRejected {
            status: status.as_u16(),
            detail,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_unauthorized() {
        let err = status_error(StatusCode::UNAUTHORIZED, "expired".into());
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[test]
    fn test_status_error_not_found_is_absence() {
        let err = status_error(StatusCode::NOT_FOUND, String::new());
        assert!(err.is_expected_absence());
    }

    #[test]
    fn test_status_error_carries_server_diagnostic() {
        let err = status_error(StatusCode::UNPROCESSABLE_ENTITY, "bad filter".into());
        match err {
            ApiError::ServerRejected { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(detail, "bad filter");
            }
            other => panic!("expected ServerRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert!(client.token().is_none());
    }
}
