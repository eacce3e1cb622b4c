use crate::ports::outbound::card_search::CardSearch;
use crate::ports::outbound::image_fetcher::ImageFetcher;
use crate::ports::outbound::image_store::ImageStore;

pub struct App<CS, IF, IS> {
    pub card_search: CS,
    pub image_fetcher: IF,
    pub image_store: IS,
}

impl<CS, IF, IS> App<CS, IF, IS>
where
    CS: CardSearch + Send + Sync,
    IF: ImageFetcher + Send + Sync,
    IS: ImageStore + Send + Sync,
{
    pub fn new(card_search: CS, image_fetcher: IF, image_store: IS) -> Self {
        Self {
            card_search,
            image_fetcher,
            image_store,
        }
    }
}
