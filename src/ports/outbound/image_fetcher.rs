use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error fetching image - {0}")]
pub struct ImageFetchError(String);

impl ImageFetchError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageFetchError>;
}
