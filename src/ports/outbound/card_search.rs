use crate::domain::card::Card;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// What a single search request came back with.
///
/// `NotFound` is the transport saying so (a 404); a successful response with
/// an empty list is `Matched(vec![])`.
#[cfg_attr(test, derive(Clone, PartialEq))]
#[derive(Debug)]
pub enum SearchOutcome {
    Matched(Vec<Card>),
    NotFound,
}

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Card search failed - {0}")]
pub struct CardSearchError(String);

impl CardSearchError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardSearch {
    async fn search(&self, query: &str) -> Result<SearchOutcome, CardSearchError>;
}
