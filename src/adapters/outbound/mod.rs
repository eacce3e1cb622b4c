pub mod image_store;
pub mod scryfall;

use crate::adapters::outbound::scryfall::{ClientBuildError, Scryfall};
use crate::ports::outbound::card_search::CardSearch;
use crate::ports::outbound::image_fetcher::ImageFetcher;

#[allow(clippy::missing_errors_doc)]
pub fn init_scryfall() -> Result<impl CardSearch + ImageFetcher + Clone, ClientBuildError> {
    Scryfall::create()
}
