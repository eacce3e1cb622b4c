use crate::domain::utils::REGEX_COLLECTION;
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

/// Largest number of copies a single row may expand to.
pub const MAX_COUNT: usize = 10_000;

/// One physical card of a decklist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecklistEntry {
    pub name: String,
    pub edition: String,
}

impl DecklistEntry {
    #[must_use]
    pub fn new(name: &str, edition: &str) -> Self {
        Self {
            name: name.to_string(),
            edition: edition.to_string(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("not enough columns, expected 3 but found {0}")]
    TooFewFields(usize),
    #[error("invalid count '{0}'")]
    InvalidCount(String),
    #[error("count {0} is larger than {max}", max = MAX_COUNT)]
    CountTooLarge(usize),
    #[error("unreadable row - {0}")]
    Unreadable(String),
}

/// A row that was skipped while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowWarning {
    pub line: u64,
    pub fields: Vec<String>,
    pub error: RowError,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decklist {
    /// Every row repeated `count` times, in input order.
    pub entries: Vec<DecklistEntry>,
    pub selected: DecklistEntry,
    pub selected_index: usize,
    pub total_count: usize,
    pub warnings: Vec<RowWarning>,
}

impl Decklist {
    /// Entry at `index`, or an empty entry when out of range.
    #[must_use]
    pub fn select(&self, index: usize) -> DecklistEntry {
        self.entries.get(index).cloned().unwrap_or_default()
    }
}

/// Parses `count,name,edition` rows and selects the entry at `index`.
///
/// Malformed rows are skipped and recorded in `warnings`; parsing never fails
/// as a whole.
#[must_use]
pub fn parse(text: &str, index: usize) -> Decklist {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.trim().as_bytes());

    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(why) => {
                log::warn!("Could not read decklist row {} - {why}", row + 1);
                warnings.push(RowWarning {
                    line: why.position().map_or(row as u64 + 1, csv::Position::line),
                    fields: Vec::new(),
                    error: RowError::Unreadable(why.to_string()),
                });
                continue;
            }
        };

        let fields: Vec<String> = record.iter().map(String::from).collect();
        let line = record.position().map_or(row as u64 + 1, csv::Position::line);

        match parse_row(&record) {
            Ok(None) => log::debug!("Skipping empty row {line}"),
            Ok(Some((count, entry))) => {
                log::info!(
                    "Parsed row: count={count}, name='{}', edition='{}'",
                    entry.name,
                    entry.edition
                );
                entries.extend(std::iter::repeat(entry).take(count));
            }
            Err(error) => {
                log::warn!("Could not parse row {line}: {fields:?} ({error})");
                warnings.push(RowWarning {
                    line,
                    fields,
                    error,
                });
            }
        }
    }

    let mut decklist = Decklist {
        entries,
        selected_index: index,
        warnings,
        ..Decklist::default()
    };
    decklist.total_count = decklist.entries.len();
    decklist.selected = decklist.select(index);
    decklist
}

fn parse_row(record: &StringRecord) -> Result<Option<(usize, DecklistEntry)>, RowError> {
    if record.is_empty() || (record.len() == 1 && record[0].trim().is_empty()) {
        return Ok(None);
    }

    if record.len() < 3 {
        return Err(RowError::TooFewFields(record.len()));
    }

    let count = parse_count(&record[0])?;
    let entry = DecklistEntry::new(record[1].trim(), record[2].trim());

    Ok(Some((count, entry)))
}

/// Strips every `x`/`X` from the token before parsing, so `4x`, `X4` and
/// `4` all read as 4.
fn parse_count(token: &str) -> Result<usize, RowError> {
    let digits = REGEX_COLLECTION.count_marker.replace_all(token.trim(), "");
    let count = digits
        .trim()
        .parse::<usize>()
        .map_err(|_| RowError::InvalidCount(token.to_string()))?;

    if count > MAX_COUNT {
        return Err(RowError::CountTooLarge(count));
    }

    Ok(count)
}
