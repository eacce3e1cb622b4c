use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error saving image - {0}")]
pub struct ImageStoreError(String);

impl ImageStoreError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageStore {
    async fn save(&self, file_name: &str, image: &[u8]) -> Result<PathBuf, ImageStoreError>;
}
