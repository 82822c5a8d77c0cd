//! Hint service client
//!
//! Wire types for the hint API plus the [`HintService`] seam. The real
//! transport lives in [`http`]; commands only see the trait.

mod error;
pub mod http;

pub use error::{ClientError, Result, ValidationIssue, parse_validation_body};
pub use http::HintClient;

use crate::config::DEFAULT_CORPUS;
use crate::core::LetterConstraint;
use crate::query::HintQuery;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use tracing::debug;

/// Body of `POST /api/hint/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRequest {
    pub corpus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<NonZeroU32>,
    pub query: Vec<LetterConstraint>,
}

impl HintRequest {
    /// Build a request from a derived query
    ///
    /// # Errors
    /// Returns `ClientError::RejectedQuery` if the query carries errors.
    pub fn from_query(
        query: HintQuery,
        corpus: impl Into<String>,
        limit: Option<NonZeroU32>,
    ) -> Result<Self> {
        let constraints = query
            .into_constraints()
            .map_err(ClientError::RejectedQuery)?;

        Ok(Self {
            corpus: corpus.into(),
            limit,
            query: constraints,
        })
    }
}

/// One ranked word returned by the hint service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordHint {
    pub word: String,
    /// Rank of the word's letter-position spread among the candidates
    #[serde(default)]
    pub partition: u64,
    /// Occurrence count in the frequency table, 0 when unknown
    #[serde(default)]
    pub frequency: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Access to the remote hint computation
pub trait HintService {
    /// Names of the corpora the service can search
    ///
    /// # Errors
    /// Returns an error if the service can't be reached or replies badly.
    fn corpora(&self) -> Result<Vec<String>>;

    /// Candidate words matching the request, in service order
    ///
    /// # Errors
    /// Returns an error if the service can't be reached or rejects the request.
    fn hints(&self, request: &HintRequest) -> Result<Vec<WordHint>>;
}

/// Order hints by descending score when the service provides one
///
/// The sort is stable, so hints without a score keep the service's order.
pub fn rank_hints(hints: &mut [WordHint]) {
    hints.sort_by(|a, b| {
        let a = a.score.unwrap_or(f64::NEG_INFINITY);
        let b = b.score.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
}

/// Available corpora and the one to use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusChoice {
    pub options: Vec<String>,
    pub selected: String,
}

/// Pick a corpus from the service's list
///
/// Options are sorted. `preferred` wins if offered, then [`DEFAULT_CORPUS`],
/// then the first option. Returns `None` for an empty list.
///
/// # Examples
/// ```
/// use wordle_hints::client::select_corpus;
///
/// let choice = select_corpus(vec!["wiki".into(), "web2".into()], None).unwrap();
/// assert_eq!(choice.options, vec!["web2", "wiki"]);
/// assert_eq!(choice.selected, "web2");
/// ```
#[must_use]
pub fn select_corpus(mut options: Vec<String>, preferred: Option<&str>) -> Option<CorpusChoice> {
    options.sort();
    options.dedup();

    let selected = preferred
        .and_then(|p| options.iter().find(|o| o.as_str() == p))
        .or_else(|| options.iter().find(|o| o.as_str() == DEFAULT_CORPUS))
        .or_else(|| options.first())?
        .clone();

    Some(CorpusChoice { options, selected })
}

/// Fetch the corpus list and choose one
///
/// # Errors
/// Returns `ClientError::EmptyCorpus` when the service lists nothing, or any
/// transport error.
pub fn fetch_corpus_choice<S: HintService + ?Sized>(
    service: &S,
    preferred: Option<&str>,
) -> Result<CorpusChoice> {
    let options = service.corpora()?;
    select_corpus(options, preferred).ok_or(ClientError::EmptyCorpus)
}

/// Submit a derived query and return ranked hints
///
/// Nothing is sent when the query has errors.
///
/// # Errors
/// Returns `ClientError::RejectedQuery` for a query with errors, otherwise
/// whatever the service returns.
pub fn request_hints<S: HintService + ?Sized>(
    service: &S,
    query: HintQuery,
    corpus: &str,
    limit: Option<NonZeroU32>,
) -> Result<Vec<WordHint>> {
    let request = HintRequest::from_query(query, corpus, limit)?;
    debug!(
        corpus,
        constraints = request.query.len(),
        limit = request.limit.map(NonZeroU32::get),
        "requesting hints"
    );

    let mut hints = service.hints(&request)?;
    rank_hints(&mut hints);
    Ok(hints)
}
