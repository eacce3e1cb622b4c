use crate::domain::app::App;
use crate::domain::card::ImageUris;
use crate::domain::search::ResolvedCard;
use crate::domain::utils::safe_file_name;
use crate::ports::outbound::card_search::CardSearch;
use crate::ports::outbound::image_fetcher::ImageFetcher;
use crate::ports::outbound::image_store::ImageStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Full,
    ArtCrop,
    BorderCrop,
}

impl ImageKind {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::ArtCrop => "art_crop",
            Self::BorderCrop => "border_crop",
        }
    }

    #[must_use]
    pub fn url(self, uris: &ImageUris) -> Option<&str> {
        match self {
            Self::Full => uris.large.as_deref(),
            Self::ArtCrop => uris.art_crop.as_deref(),
            Self::BorderCrop => uris.border_crop.as_deref(),
        }
    }
}

/// Raw image bytes, or the text a placeholder should be rendered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardImage {
    Fetched(Vec<u8>),
    Placeholder(String),
}

impl CardImage {
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardImages {
    pub card_name: String,
    pub full: CardImage,
    pub art_crop: CardImage,
    pub border_crop: CardImage,
}

impl CardImages {
    fn placeholders(card_name: &str, text: &str) -> Self {
        Self {
            card_name: card_name.to_string(),
            full: CardImage::Placeholder(text.to_string()),
            art_crop: CardImage::Placeholder(text.to_string()),
            border_crop: CardImage::Placeholder(text.to_string()),
        }
    }
}

impl<CS, IF, IS> App<CS, IF, IS>
where
    CS: CardSearch + Send + Sync,
    IF: ImageFetcher + Send + Sync,
    IS: ImageStore + Send + Sync,
{
    pub async fn resolve_images(&self, result: &ResolvedCard, save_images: bool) -> CardImages {
        let Some(card) = result.card() else {
            let message = result.message().unwrap_or_default();
            return CardImages::placeholders(message, message);
        };

        let Some(uris) = card.image_uris() else {
            log::warn!("No images found for '{}'", card.name);
            return CardImages::placeholders(&card.name, &format!("no images for {}", card.name));
        };

        let Some(full) = self.fetch(ImageKind::Full, uris).await else {
            log::warn!("Error downloading the full image for '{}'", card.name);
            return CardImages::placeholders(
                &card.name,
                &format!("image download failed for {}", card.name),
            );
        };

        let art_crop = match self.fetch(ImageKind::ArtCrop, uris).await {
            Some(image) => CardImage::Fetched(image),
            None => CardImage::Placeholder(format!("art crop unavailable for {}", card.name)),
        };
        let border_crop = match self.fetch(ImageKind::BorderCrop, uris).await {
            Some(image) => CardImage::Fetched(image),
            None => CardImage::Placeholder(format!("border crop unavailable for {}", card.name)),
        };

        let images = CardImages {
            card_name: card.name.clone(),
            full: CardImage::Fetched(full),
            art_crop,
            border_crop,
        };

        if save_images {
            self.save_images(&images, uris).await;
        }

        images
    }

    async fn fetch(&self, kind: ImageKind, uris: &ImageUris) -> Option<Vec<u8>> {
        let url = kind.url(uris)?;
        match self.image_fetcher.fetch(url).await {
            Ok(image) => Some(image),
            Err(why) => {
                log::warn!("Error fetching {} image from {url} - {why}", kind.suffix());
                None
            }
        }
    }

    async fn save_images(&self, images: &CardImages, uris: &ImageUris) {
        let stem = safe_file_name(&images.card_name);
        let saved = [
            (ImageKind::Full, &images.full),
            (ImageKind::ArtCrop, &images.art_crop),
            (ImageKind::BorderCrop, &images.border_crop),
        ];

        for (kind, image) in saved {
            let CardImage::Fetched(bytes) = image else {
                continue;
            };
            let extension = kind.url(uris).map_or("jpg", file_extension);
            let file_name = format!("{stem}_{}.{extension}", kind.suffix());
            match self.image_store.save(&file_name, bytes).await {
                Ok(path) => log::info!("Saved '{}' to {}", images.card_name, path.display()),
                Err(why) => log::warn!("{why}"),
            }
        }
    }
}

/// Extension of the last path segment of `url`, ignoring any query string.
fn file_extension(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => extension,
        _ => "jpg",
    }
}
