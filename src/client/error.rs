//! Hint service error types

use crate::query::QueryError;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// One entry of a 422 response's `detail` list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc: Vec<String> = self
            .loc
            .iter()
            .map(|part| match part {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        if loc.is_empty() {
            write!(f, "{}", self.msg)
        } else {
            write!(f, "{} - {}", loc.join(" - "), self.msg)
        }
    }
}

#[derive(Deserialize)]
struct ValidationBody {
    detail: Vec<ValidationIssue>,
}

/// Parse a 422 body of the form `{"detail": [{"loc": [...], "msg": "..."}]}`
#[must_use]
pub fn parse_validation_body(body: &str) -> Option<Vec<ValidationIssue>> {
    serde_json::from_str::<ValidationBody>(body)
        .ok()
        .map(|b| b.detail)
}

fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hint server at {url} is likely to be down")]
    Unavailable { url: String },

    #[error("hint server rejected the request: {}", join_display(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("hint server returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not fetch any corpus from the api server")]
    EmptyCorpus,

    #[error("query is not ready: {}", join_display(.0))]
    RejectedQuery(Vec<QueryError>),
}
