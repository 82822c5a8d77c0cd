//! Hint fetching command
//!
//! Derives the query for a grid and, if it is error-free, sends it to the
//! hint service.

use crate::client::{
    ClientError, CorpusChoice, HintService, WordHint, fetch_corpus_choice, request_hints,
};
use crate::core::Grid;
use crate::query::{HintQuery, derive};
use std::num::NonZeroU32;
use tracing::info;

/// What to search for
pub struct HintsConfig {
    pub corpus: String,
    pub limit: Option<NonZeroU32>,
}

impl HintsConfig {
    #[must_use]
    pub const fn new(corpus: String) -> Self {
        Self {
            corpus,
            limit: None,
        }
    }
}

/// Result of a hint lookup
pub struct HintsResult {
    pub corpus: String,
    pub query: HintQuery,
    pub hints: Vec<WordHint>,
}

/// Derive the grid's query and fetch hints for it
///
/// # Errors
///
/// Returns `ClientError::RejectedQuery` without contacting the service when
/// the grid is incomplete or contradictory, otherwise any service error.
pub fn fetch_hints<S: HintService + ?Sized>(
    service: &S,
    grid: &Grid,
    config: &HintsConfig,
) -> Result<HintsResult, ClientError> {
    let query = derive(grid);
    let hints = request_hints(service, query.clone(), &config.corpus, config.limit)?;
    info!(corpus = %config.corpus, count = hints.len(), "hint lookup complete");

    Ok(HintsResult {
        corpus: config.corpus.clone(),
        query,
        hints,
    })
}

/// List the service's corpora and pick one, preferring `preferred`
///
/// # Errors
///
/// Returns an error if the service can't be reached or lists no corpus.
pub fn list_corpora<S: HintService + ?Sized>(
    service: &S,
    preferred: Option<&str>,
) -> Result<CorpusChoice, ClientError> {
    fetch_corpus_choice(service, preferred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeService;
    use crate::query::QueryError;

    #[test]
    fn fetch_hints_returns_service_words() {
        let service = FakeService::with_hints(&["STOUT", "STUNT"]);
        let mut grid = Grid::new();
        grid.push_row("STEAM", "GG---").unwrap();

        let mut config = HintsConfig::new("coca".to_string());
        config.limit = NonZeroU32::new(5);
        let result = fetch_hints(&service, &grid, &config).unwrap();

        assert_eq!(result.corpus, "coca");
        assert_eq!(result.hints.len(), 2);
        assert!(result.query.is_submittable());
        assert_eq!(service.requests.borrow()[0].limit, NonZeroU32::new(5));
    }

    #[test]
    fn fetch_hints_blocks_contradictions() {
        let service = FakeService::with_hints(&["STOUT"]);
        let mut grid = Grid::new();
        grid.push_row("SLATE", "G----").unwrap();
        grid.push_row("MOSSY", "-----").unwrap();

        let result = fetch_hints(&service, &grid, &HintsConfig::new("web2".to_string()));
        assert!(matches!(
            result,
            Err(ClientError::RejectedQuery(errors)) if errors.contains(&QueryError::IllDefined('S'))
        ));
        assert!(service.requests.borrow().is_empty());
    }

    #[test]
    fn list_corpora_selects_preferred() {
        let service = FakeService::with_hints(&[]);
        let choice = list_corpora(&service, Some("coca")).unwrap();
        assert_eq!(choice.options, vec!["coca", "web2"]);
        assert_eq!(choice.selected, "coca");
    }
}
