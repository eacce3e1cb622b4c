pub mod terminal;

use crate::adapters::inbound::terminal::{RunOptions, Terminal};
use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::card_search::CardSearch;
use crate::ports::outbound::image_fetcher::ImageFetcher;
use crate::ports::outbound::image_store::ImageStore;

pub fn create_client<CS, IF, IS>(app: App<CS, IF, IS>) -> impl Client
where
    CS: CardSearch + Send + Sync + 'static,
    IF: ImageFetcher + Send + Sync + 'static,
    IS: ImageStore + Send + Sync + 'static,
{
    Terminal::new(app, RunOptions::from_env())
}
