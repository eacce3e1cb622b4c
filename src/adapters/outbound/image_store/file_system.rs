use crate::ports::outbound::image_store::{ImageStore, ImageStoreError};
use async_trait::async_trait;
use std::env;
use std::path::PathBuf;

const DEFAULT_IMAGES_DIR: &str = "scryfall_card_images";

pub struct FileSystem {
    image_dir: PathBuf,
}

impl FileSystem {
    #[must_use]
    pub fn create() -> Self {
        let image_dir = env::var("IMAGES_DIR").unwrap_or_else(|_| DEFAULT_IMAGES_DIR.to_string());
        Self::new(image_dir)
    }

    #[must_use]
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
        }
    }
}

#[async_trait]
impl ImageStore for FileSystem {
    async fn save(&self, file_name: &str, image: &[u8]) -> Result<PathBuf, ImageStoreError> {
        if let Err(why) = tokio::fs::create_dir_all(&self.image_dir).await {
            log::warn!("Error creating image dir {why:?}");
            return Err(ImageStoreError::new(format!(
                "Could not create {}",
                self.image_dir.display()
            )));
        }

        let path = self.image_dir.join(file_name);
        tokio::fs::write(&path, image).await.map_err(|why| {
            log::warn!("Error writing image {why:?}");
            ImageStoreError::new(format!("Could not write {}", path.display()))
        })?;

        Ok(path)
    }
}
