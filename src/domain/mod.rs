pub mod app;
pub mod card;
pub mod decklist;
pub mod fields;
pub mod images;
pub mod query;
pub mod search;
pub mod utils;
