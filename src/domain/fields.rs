use crate::domain::search::ResolvedCard;

/// The five text outputs of a resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFields {
    pub name: String,
    pub mana_cost: String,
    pub type_line: String,
    pub oracle_text: String,
    pub flavor_text: String,
}

impl CardFields {
    /// Projects the text fields of a resolved card.
    ///
    /// A failed resolution puts its reason in `name` and leaves the rest
    /// empty. When the card has no oracle text of its own, every still empty
    /// field except `name` is filled from the first card face.
    #[must_use]
    pub fn extract(result: &ResolvedCard) -> Self {
        let Some(card) = result.card() else {
            return Self {
                name: result.message().unwrap_or_default().to_string(),
                ..Self::default()
            };
        };

        let mut fields = Self {
            name: card.name.clone(),
            mana_cost: card.mana_cost.clone(),
            type_line: card.type_line.clone(),
            oracle_text: card.oracle_text.clone(),
            flavor_text: card.flavor_text.clone(),
        };

        if !fields.oracle_text.is_empty() {
            return fields;
        }

        if let Some(face) = card.first_face() {
            log::debug!("Using first face text for '{}'", card.name);
            fill_if_empty(&mut fields.mana_cost, &face.mana_cost);
            fill_if_empty(&mut fields.type_line, &face.type_line);
            fill_if_empty(&mut fields.oracle_text, &face.oracle_text);
            fill_if_empty(&mut fields.flavor_text, &face.flavor_text);
        }

        fields
    }
}

fn fill_if_empty(field: &mut String, fallback: &str) {
    if field.is_empty() {
        *field = fallback.to_string();
    }
}
