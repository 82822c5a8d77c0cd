//! Blocking HTTP transport for the hint API
//!
//! Endpoints, relative to the configured base URL:
//! - `GET  {base}/corpus` -> `["web2", ...]`
//! - `POST {base}/`       -> `[{"word": ..., "partition": ..., "frequency": ...}]`

use super::{ClientError, HintRequest, HintService, Result, WordHint, parse_validation_body};
use crate::config::ServerConfig;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use tracing::{debug, info, warn};

/// Join a base URL and an endpoint path with exactly one slash
///
/// An empty path yields the base with a trailing slash.
///
/// # Examples
/// ```
/// use wordle_hints::client::http::join_url;
///
/// assert_eq!(join_url("http://h/api/hint/", "/corpus"), "http://h/api/hint/corpus");
/// assert_eq!(join_url("http://h/api/hint", ""), "http://h/api/hint/");
/// ```
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Hint API client over `reqwest`'s blocking client
#[derive(Debug, Clone)]
pub struct HintClient {
    client: Client,
    base_url: String,
}

impl HintClient {
    /// Build a client for the configured server
    ///
    /// # Errors
    /// Returns `ClientError::Http` if the TLS backend can't be initialised.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                warn!(url = %self.base_url, error = %e, "hint server unreachable");
                ClientError::Unavailable {
                    url: self.base_url.clone(),
                }
            } else {
                ClientError::Http(e)
            }
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "hint server replied");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "hint request failed");
        Err(error_for(status, body))
    }
}

/// Map a non-success reply to an error
///
/// A 422 carrying a `detail` list becomes `Validation`; anything else keeps
/// the raw status and body.
fn error_for(status: StatusCode, body: String) -> ClientError {
    if status == StatusCode::UNPROCESSABLE_ENTITY
        && let Some(issues) = parse_validation_body(&body)
    {
        return ClientError::Validation(issues);
    }
    ClientError::Status {
        status: status.as_u16(),
        body,
    }
}

impl HintService for HintClient {
    fn corpora(&self) -> Result<Vec<String>> {
        let url = join_url(&self.base_url, "corpus");
        let response = self.send(self.client.get(&url))?;
        let corpora: Vec<String> = serde_json::from_str(&response.text()?)?;

        info!(count = corpora.len(), "fetched corpus list");
        Ok(corpora)
    }

    fn hints(&self, request: &HintRequest) -> Result<Vec<WordHint>> {
        let url = join_url(&self.base_url, "");
        let response = self.send(self.client.post(&url).json(request))?;
        let hints: Vec<WordHint> = serde_json::from_str(&response.text()?)?;

        info!(count = hints.len(), corpus = %request.corpus, "fetched hints");
        Ok(hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join_url("http://h/api", "corpus"), "http://h/api/corpus");
        assert_eq!(join_url("http://h/api/", "corpus"), "http://h/api/corpus");
        assert_eq!(join_url("http://h/api//", "//corpus"), "http://h/api/corpus");
        assert_eq!(join_url("http://h/api/", "/"), "http://h/api/");
    }

    #[test]
    fn client_keeps_trimmed_base_url() {
        let config = ServerConfig {
            url: "  http://localhost:9999/api/hint ".to_string(),
            ..ServerConfig::default()
        };
        let client = HintClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/api/hint");
    }

    #[test]
    fn unprocessable_with_detail_is_validation() {
        let body = r#"{"detail":[{"loc":["body","limit"],"msg":"ensure this value is greater than 0"}]}"#;
        let error = error_for(StatusCode::UNPROCESSABLE_ENTITY, body.to_string());

        let ClientError::Validation(issues) = error else {
            panic!("expected a validation error, got {error:?}");
        };
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].msg, "ensure this value is greater than 0");
    }

    #[test]
    fn unprocessable_without_detail_keeps_status() {
        let error = error_for(StatusCode::UNPROCESSABLE_ENTITY, "not json".to_string());
        assert!(matches!(
            error,
            ClientError::Status { status: 422, ref body } if body == "not json"
        ));
    }

    #[test]
    fn server_error_keeps_status_and_body() {
        let error = error_for(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        );
        assert!(matches!(
            error,
            ClientError::Status { status: 500, ref body } if body == "Internal Server Error"
        ));
    }

    #[test]
    fn unreachable_server_reports_unavailable() {
        // Port 9 (discard) on localhost is normally closed
        let config = ServerConfig {
            url: "http://127.0.0.1:9/api/hint".to_string(),
            connect_timeout_secs: 1,
            timeout_secs: 1,
        };
        let client = HintClient::new(&config).unwrap();
        assert!(matches!(
            client.corpora(),
            Err(ClientError::Unavailable { .. })
        ));
    }
}
