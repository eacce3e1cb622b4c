use crate::domain::card::Card;
use crate::domain::decklist::{DecklistEntry, RowWarning};
use crate::domain::fields::CardFields;
use crate::domain::images::{CardImage, CardImages};
use std::fmt::Write;

fn describe(image: &CardImage) -> String {
    match image {
        CardImage::Fetched(bytes) => format!("{} bytes", bytes.len()),
        CardImage::Placeholder(text) => format!("placeholder ({text})"),
    }
}

/// Printing details are only listed for a found card.
pub fn card_section(
    index: usize,
    entry: &DecklistEntry,
    card: Option<&Card>,
    fields: &CardFields,
    images: &CardImages,
) -> String {
    let mut section = String::new();
    let edition = if entry.edition.is_empty() {
        "any"
    } else {
        entry.edition.as_str()
    };

    // Writing to a String never fails.
    let _ = writeln!(section, "#{index} {} [{edition}]", entry.name);
    let _ = writeln!(section, "  name:        {}", fields.name);
    let _ = writeln!(section, "  mana cost:   {}", fields.mana_cost);
    let _ = writeln!(section, "  type line:   {}", fields.type_line);
    let _ = writeln!(section, "  oracle text: {}", fields.oracle_text);
    let _ = writeln!(section, "  flavor text: {}", fields.flavor_text);
    if let Some(card) = card {
        let set = match (&card.set_name, &card.set) {
            (Some(name), Some(code)) => format!("{name} ({})", code.to_uppercase()),
            (Some(name), None) => name.clone(),
            (None, Some(code)) => code.to_uppercase(),
            (None, None) => String::new(),
        };
        let _ = writeln!(section, "  set:         {set}");
        let _ = writeln!(section, "  artist:      {}", card.artist.as_deref().unwrap_or_default());
        let _ = writeln!(section, "  scryfall:    {}", card.scryfall_uri.as_deref().unwrap_or_default());
    }
    let _ = writeln!(section, "  full:        {}", describe(&images.full));
    let _ = writeln!(section, "  art crop:    {}", describe(&images.art_crop));
    let _ = writeln!(section, "  border crop: {}", describe(&images.border_crop));

    section
}

pub fn warning_line(warning: &RowWarning) -> String {
    format!(
        "skipped line {}: {:?} ({})\n",
        warning.line, warning.fields, warning.error
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decklist::RowError;

    #[test]
    fn test_card_section() {
        let entry = DecklistEntry::new("Shock", "M10");
        let fields = CardFields {
            name: String::from("Shock"),
            mana_cost: String::from("{R}"),
            type_line: String::from("Instant"),
            oracle_text: String::from("Shock deals 2 damage to any target."),
            flavor_text: String::new(),
        };
        let images = CardImages {
            card_name: String::from("Shock"),
            full: CardImage::Fetched(vec![0; 4]),
            art_crop: CardImage::Placeholder(String::from("art crop unavailable for Shock")),
            border_crop: CardImage::Fetched(vec![0; 2]),
        };

        let card = Card {
            name: String::from("Shock"),
            set: Some(String::from("m10")),
            set_name: Some(String::from("Magic 2010")),
            artist: Some(String::from("Jon Foster")),
            scryfall_uri: Some(String::from("https://scryfall.com/card/m10/158/shock")),
            ..Card::default()
        };

        let section = card_section(3, &entry, Some(&card), &fields, &images);

        assert!(section.starts_with("#3 Shock [M10]\n"));
        assert!(section.contains("  mana cost:   {R}\n"));
        assert!(section.contains("  set:         Magic 2010 (M10)\n"));
        assert!(section.contains("  artist:      Jon Foster\n"));
        assert!(section.contains("  scryfall:    https://scryfall.com/card/m10/158/shock\n"));
        assert!(section.contains("  full:        4 bytes\n"));
        assert!(section.contains("  art crop:    placeholder (art crop unavailable for Shock)\n"));
    }

    #[test]
    fn test_card_section_without_edition() {
        let entry = DecklistEntry::new("Shock", "");
        let section = card_section(
            0,
            &entry,
            None,
            &CardFields::default(),
            &CardImages {
                card_name: String::new(),
                full: CardImage::Placeholder(String::new()),
                art_crop: CardImage::Placeholder(String::new()),
                border_crop: CardImage::Placeholder(String::new()),
            },
        );
        assert!(section.starts_with("#0 Shock [any]\n"));
        assert!(!section.contains("  artist:"));
    }

    #[test]
    fn test_warning_line() {
        let warning = RowWarning {
            line: 2,
            fields: vec![String::from("notarow")],
            error: RowError::TooFewFields(1),
        };
        assert_eq!(
            warning_line(&warning),
            "skipped line 2: [\"notarow\"] (not enough columns, expected 3 but found 1)\n"
        );
    }
}
