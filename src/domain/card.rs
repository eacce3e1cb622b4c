use serde::{Deserialize, Serialize};

/// Image URLs Scryfall publishes for a card or a card face, keyed by crop.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mana_cost: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: String,
    #[serde(default)]
    pub flavor_text: String,
    pub image_uris: Option<ImageUris>,
}

/// A card object as returned by the search endpoint.
///
/// Multi-faced cards usually leave the text fields and `image_uris` empty at
/// the top level and carry them on each entry of `card_faces` instead.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Card {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mana_cost: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: String,
    #[serde(default)]
    pub flavor_text: String,
    pub set: Option<String>,
    pub set_name: Option<String>,
    pub artist: Option<String>,
    pub scryfall_uri: Option<String>,
    pub image_uris: Option<ImageUris>,
    pub card_faces: Option<Vec<CardFace>>,
}

impl Card {
    #[must_use]
    pub fn first_face(&self) -> Option<&CardFace> {
        self.card_faces.as_ref()?.first()
    }

    /// Top level URIs, or the first face's when the card has none of its own.
    #[must_use]
    pub fn image_uris(&self) -> Option<&ImageUris> {
        self.image_uris
            .as_ref()
            .or_else(|| self.first_face()?.image_uris.as_ref())
    }

    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
