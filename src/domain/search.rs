use crate::domain::app::App;
use crate::domain::card::Card;
use crate::domain::query::CardQuery;
use crate::ports::outbound::card_search::{CardSearch, CardSearchError, SearchOutcome};
use crate::ports::outbound::image_fetcher::ImageFetcher;
use crate::ports::outbound::image_store::ImageStore;
use tokio::time::Instant;

/// Outcome of resolving one query to one card.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Debug)]
pub enum ResolvedCard {
    Found {
        card: Box<Card>,
        /// Whether the exact phrase search produced the match.
        exact_match: bool,
        /// The matched name differs from the requested one.
        soft_mismatch: bool,
    },
    NotFound {
        reason: String,
    },
    Error {
        detail: String,
    },
}

impl ResolvedCard {
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Self::Found { card, .. } => Some(card.as_ref()),
            Self::NotFound { .. } | Self::Error { .. } => None,
        }
    }

    /// Reason or detail for a failed resolution.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Found { .. } => None,
            Self::NotFound { reason } => Some(reason),
            Self::Error { detail } => Some(detail),
        }
    }
}

fn not_found(name: &str) -> ResolvedCard {
    ResolvedCard::NotFound {
        reason: format!("no card matches {name}"),
    }
}

impl<CS, IF, IS> App<CS, IF, IS>
where
    CS: CardSearch + Send + Sync,
    IF: ImageFetcher + Send + Sync,
    IS: ImageStore + Send + Sync,
{
    pub async fn resolve(&self, query: &CardQuery) -> ResolvedCard {
        let start = Instant::now();

        if query.name().trim().is_empty() {
            log::warn!("Refusing to search for an empty card name");
            return ResolvedCard::NotFound {
                reason: String::from("no card name given"),
            };
        }

        let (outcome, exact_match) = match self.lookup(query).await {
            Ok(found) => found,
            Err(why) => {
                log::warn!("Error resolving '{}' - {why}", query.name());
                return ResolvedCard::Error {
                    detail: why.to_string(),
                };
            }
        };

        let SearchOutcome::Matched(cards) = outcome else {
            log::info!("No card found for '{}'", query.name());
            return not_found(query.name());
        };

        let Some(card) = cards.into_iter().next() else {
            log::info!("Search for '{}' returned no cards", query.name());
            return not_found(query.name());
        };

        let soft_mismatch = !card.matches_name(query.name());
        if soft_mismatch {
            log::warn!(
                "Requested '{}' but the closest match was '{}'",
                query.name(),
                card.name
            );
        }

        log::info!(
            "Found match '{}' for query '{}' in {} ms",
            card.name,
            query.name(),
            start.elapsed().as_millis()
        );

        ResolvedCard::Found {
            card: Box::new(card),
            exact_match,
            soft_mismatch,
        }
    }

    /// Runs the query, retrying once without the exact marker when the exact
    /// search is not found. Returns the outcome and the match mode used.
    async fn lookup(&self, query: &CardQuery) -> Result<(SearchOutcome, bool), CardSearchError> {
        let outcome = self.card_search.search(&query.search_string()).await?;

        if query.exact_match() && matches!(outcome, SearchOutcome::NotFound) {
            log::info!(
                "No exact match for '{}', retrying with a normal search",
                query.name()
            );
            let relaxed = query.relaxed();
            let outcome = self.card_search.search(&relaxed.search_string()).await?;
            return Ok((outcome, false));
        }

        Ok((outcome, query.exact_match()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::tests::{delver_of_secrets, lightning_bolt};
    use crate::ports::outbound::card_search::MockCardSearch;
    use crate::ports::outbound::image_fetcher::MockImageFetcher;
    use crate::ports::outbound::image_store::MockImageStore;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn app(card_search: MockCardSearch) -> App<MockCardSearch, MockImageFetcher, MockImageStore> {
        App::new(card_search, MockImageFetcher::new(), MockImageStore::new())
    }

    #[tokio::test]
    async fn test_resolve_exact_match() {
        let mut card_search = MockCardSearch::new();
        card_search
            .expect_search()
            .with(eq("!\"Lightning Bolt\""))
            .times(1)
            .returning(|_| Ok(SearchOutcome::Matched(vec![lightning_bolt()])));

        let result = app(card_search)
            .resolve(&CardQuery::new("Lightning Bolt", "", true))
            .await;

        assert_eq!(
            result,
            ResolvedCard::Found {
                card: Box::new(lightning_bolt()),
                exact_match: true,
                soft_mismatch: false,
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_name_retries_then_not_found() {
        let mut seq = Sequence::new();
        let mut card_search = MockCardSearch::new();
        card_search
            .expect_search()
            .with(eq("!\"Xyzzy Wizard\""))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(SearchOutcome::NotFound));
        card_search
            .expect_search()
            .with(eq("Xyzzy Wizard"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(SearchOutcome::NotFound));

        let result = app(card_search)
            .resolve(&CardQuery::new("Xyzzy Wizard", "", true))
            .await;

        assert_eq!(
            result,
            ResolvedCard::NotFound {
                reason: String::from("no card matches Xyzzy Wizard")
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_fallback_keeps_set_clause() {
        let mut seq = Sequence::new();
        let mut card_search = MockCardSearch::new();
        card_search
            .expect_search()
            .withf(|query: &str| query.starts_with("!\"") && query.ends_with(" set:LEA"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(SearchOutcome::NotFound));
        card_search
            .expect_search()
            .with(eq("lightning bolt set:LEA"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(SearchOutcome::Matched(vec![lightning_bolt()])));

        let result = app(card_search)
            .resolve(&CardQuery::new("lightning bolt", "LEA", true))
            .await;

        let ResolvedCard::Found {
            exact_match,
            soft_mismatch,
            ..
        } = &result
        else {
            panic!("expected a found card, got {result:?}");
        };
        assert!(!exact_match);
        assert!(!soft_mismatch);
    }

    #[tokio::test]
    async fn test_resolve_loose_not_found_does_not_retry() {
        let mut card_search = MockCardSearch::new();
        card_search
            .expect_search()
            .times(1)
            .returning(|_| Ok(SearchOutcome::NotFound));

        let result = app(card_search)
            .resolve(&CardQuery::new("Nothing", "", false))
            .await;

        assert!(matches!(result, ResolvedCard::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_empty_list_is_not_found_without_retry() {
        let mut card_search = MockCardSearch::new();
        card_search
            .expect_search()
            .times(1)
            .returning(|_| Ok(SearchOutcome::Matched(vec![])));

        let result = app(card_search)
            .resolve(&CardQuery::new("Nothing", "", true))
            .await;

        assert_eq!(result.message(), Some("no card matches Nothing"));
    }

    #[tokio::test]
    async fn test_resolve_takes_first_result() {
        let mut card_search = MockCardSearch::new();
        card_search.expect_search().times(1).returning(|_| {
            Ok(SearchOutcome::Matched(vec![
                lightning_bolt(),
                delver_of_secrets(),
            ]))
        });

        let result = app(card_search)
            .resolve(&CardQuery::new("Lightning Bolt", "", false))
            .await;

        assert_eq!(result.card().map(|card| card.name.as_str()), Some("Lightning Bolt"));
    }

    #[tokio::test]
    async fn test_resolve_soft_mismatch_still_found() {
        let mut card_search = MockCardSearch::new();
        card_search
            .expect_search()
            .times(1)
            .returning(|_| Ok(SearchOutcome::Matched(vec![lightning_bolt()])));

        let result = app(card_search)
            .resolve(&CardQuery::new("bolt", "", false))
            .await;

        let ResolvedCard::Found {
            card,
            exact_match,
            soft_mismatch,
        } = result
        else {
            panic!("expected a found card");
        };
        assert_eq!(card.name, "Lightning Bolt");
        assert!(!exact_match);
        assert!(soft_mismatch);
    }

    #[tokio::test]
    async fn test_resolve_transport_error() {
        let mut card_search = MockCardSearch::new();
        card_search
            .expect_search()
            .times(1)
            .returning(|_| Err(CardSearchError::new(String::from("503 Service Unavailable"))));

        let result = app(card_search)
            .resolve(&CardQuery::new("Lightning Bolt", "", true))
            .await;

        assert_eq!(
            result,
            ResolvedCard::Error {
                detail: String::from("Card search failed - 503 Service Unavailable")
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_error_on_fallback_attempt() {
        let mut seq = Sequence::new();
        let mut card_search = MockCardSearch::new();
        card_search
            .expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(SearchOutcome::NotFound));
        card_search
            .expect_search()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(CardSearchError::new(String::from("timed out"))));

        let result = app(card_search)
            .resolve(&CardQuery::new("Lightning Bolt", "", true))
            .await;

        assert!(matches!(result, ResolvedCard::Error { .. }));
    }

    #[tokio::test]
    async fn test_resolve_empty_name_skips_search() {
        let mut card_search = MockCardSearch::new();
        card_search.expect_search().never();

        let result = app(card_search).resolve(&CardQuery::new("  ", "", true)).await;

        assert!(matches!(result, ResolvedCard::NotFound { .. }));
    }

    #[test]
    fn test_message_and_card_accessors() {
        let found = ResolvedCard::Found {
            card: Box::new(lightning_bolt()),
            exact_match: true,
            soft_mismatch: false,
        };
        assert!(found.message().is_none());
        assert!(found.card().is_some());

        let error = ResolvedCard::Error {
            detail: String::from("boom"),
        };
        assert_eq!(error.message(), Some("boom"));
        assert!(error.card().is_none());
    }
}
