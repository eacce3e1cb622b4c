use crate::domain::card::Card;
use crate::ports::outbound::card_search::{CardSearch, CardSearchError, SearchOutcome};
use crate::ports::outbound::image_fetcher::{ImageFetchError, ImageFetcher};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use thiserror::Error;

const SCRYFALL: &str = "https://api.scryfall.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
#[error("Failed HTTP client build - {0}")]
pub struct ClientBuildError(String);

/// Paginated list object returned by `/cards/search`.
#[derive(Debug, Deserialize)]
struct CardList {
    #[serde(default)]
    data: Vec<Card>,
}

/// Error object Scryfall returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiError {
    details: String,
}

#[derive(Clone)]
pub struct Scryfall {
    http_client: reqwest::Client,
    base_url: String,
}

impl Scryfall {
    #[allow(clippy::missing_errors_doc)]
    pub fn create() -> Result<Self, ClientBuildError> {
        let base_url = env::var("SCRYFALL_API_URL").unwrap_or_else(|_| SCRYFALL.to_string());
        let timeout = env::var("SCRYFALL_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let user_agent = env::var("SCRYFALL_USER_AGENT")
            .unwrap_or_else(|_| format!("scryfetch/{}", env!("CARGO_PKG_VERSION")));

        Self::new(&base_url, Duration::from_secs(timeout), &user_agent)
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ClientBuildError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|why| ClientBuildError(format!("invalid user agent - {why}")))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|why| ClientBuildError(why.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/cards/search", self.base_url)
    }

    /// Only search asks for JSON; image fetches keep the client wide `*/*`.
    fn search_request(&self, query: &str) -> RequestBuilder {
        self.http_client
            .get(self.search_url())
            .header(ACCEPT, "application/json")
            .query(&[("q", query)])
    }
}

#[async_trait]
impl CardSearch for Scryfall {
    async fn search(&self, query: &str) -> Result<SearchOutcome, CardSearchError> {
        log::info!("Searching scryfall for \"{query}\"");
        let response = self
            .search_request(query)
            .send()
            .await
            .map_err(|why| CardSearchError::new(format!("request failed - {why}")))?;

        let status = response.status();
        let body = read_body(response).await?;
        search_outcome(status, &body)
    }
}

#[async_trait]
impl ImageFetcher for Scryfall {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|why| ImageFetchError::new(why.to_string()))?;

        let image = response
            .bytes()
            .await
            .map_err(|why| ImageFetchError::new(why.to_string()))?;

        Ok(image.to_vec())
    }
}

async fn read_body(response: Response) -> Result<String, CardSearchError> {
    response
        .text()
        .await
        .map_err(|why| CardSearchError::new(format!("could not read response - {why}")))
}

/// A 404 is Scryfall saying nothing matched; any other non-success status
/// is an error.
pub(crate) fn search_outcome(status: StatusCode, body: &str) -> Result<SearchOutcome, CardSearchError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(SearchOutcome::NotFound);
    }

    if !status.is_success() {
        return Err(CardSearchError::new(error_details(status, body)));
    }

    parse_search_response(body)
}

/// Parses a successful search body. An empty `data` list is still a match
/// outcome; deciding what no cards means is left to the caller.
pub(crate) fn parse_search_response(body: &str) -> Result<SearchOutcome, CardSearchError> {
    let list: CardList = serde_json::from_str(body)
        .map_err(|why| CardSearchError::new(format!("malformed response - {why}")))?;
    Ok(SearchOutcome::Matched(list.data))
}

fn error_details(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(error) => format!("{status} - {}", error.details),
        Err(_) => status.to_string(),
    }
}
