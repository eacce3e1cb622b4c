pub mod card_search;
pub mod image_fetcher;
pub mod image_store;
