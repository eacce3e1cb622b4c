mod options;
mod report;

pub use crate::adapters::inbound::terminal::options::RunOptions;
use crate::domain::app::App;
use crate::domain::decklist;
use crate::domain::fields::CardFields;
use crate::domain::query::CardQuery;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::card_search::CardSearch;
use crate::ports::outbound::image_fetcher::ImageFetcher;
use crate::ports::outbound::image_store::ImageStore;
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Reads a decklist on stdin and reports every physical card on stdout.
pub struct Terminal<CS, IF, IS> {
    app: App<CS, IF, IS>,
    options: RunOptions,
}

impl<CS, IF, IS> Terminal<CS, IF, IS>
where
    CS: CardSearch + Send + Sync,
    IF: ImageFetcher + Send + Sync,
    IS: ImageStore + Send + Sync,
{
    pub fn new(app: App<CS, IF, IS>, options: RunOptions) -> Self {
        Self { app, options }
    }

    /// Walks the decklist one index at a time, resolving each copy on its own.
    pub async fn process(&self, text: &str) -> String {
        let decklist = decklist::parse(text, 0);
        let mut output = String::new();

        for warning in &decklist.warnings {
            output.push_str(&report::warning_line(warning));
        }

        log::info!("Decklist holds {} cards", decklist.total_count);
        for index in 0..decklist.total_count {
            let entry = decklist.select(index);
            let query = CardQuery::new(&entry.name, &entry.edition, self.options.exact_match);
            let resolved = self.app.resolve(&query).await;
            let fields = CardFields::extract(&resolved);
            let images = self
                .app
                .resolve_images(&resolved, self.options.save_images)
                .await;
            output.push_str(&report::card_section(
                index,
                &entry,
                resolved.card(),
                &fields,
                &images,
            ));
        }

        output
    }
}

#[async_trait]
impl<CS, IF, IS> Client for Terminal<CS, IF, IS>
where
    CS: CardSearch + Send + Sync,
    IF: ImageFetcher + Send + Sync,
    IS: ImageStore + Send + Sync,
{
    async fn run(&mut self) {
        let mut text = String::new();
        if let Err(why) = tokio::io::stdin().read_to_string(&mut text).await {
            log::error!("Error reading decklist from stdin - {why:?}");
            return;
        }

        let output = self.process(&text).await;

        let mut stdout = tokio::io::stdout();
        if let Err(why) = stdout.write_all(output.as_bytes()).await {
            log::error!("Error writing report - {why:?}");
        } else if let Err(why) = stdout.flush().await {
            log::error!("Error flushing report - {why:?}");
        }
    }
}
