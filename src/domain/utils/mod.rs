use regex::Regex;
use std::sync::LazyLock;

const COUNT_MARKER_RE: &str = r"[xX]";
const UNSAFE_FILE_CHARS_RE: &str = r"[ /\\]";

pub static REGEX_COLLECTION: LazyLock<RegexCollection> = LazyLock::new(|| {
    let count_marker = Regex::new(COUNT_MARKER_RE).expect("Invalid regex");
    let unsafe_file_chars = Regex::new(UNSAFE_FILE_CHARS_RE).expect("Invalid regex");
    RegexCollection {
        count_marker,
        unsafe_file_chars,
    }
});

pub struct RegexCollection {
    pub count_marker: Regex,
    pub unsafe_file_chars: Regex,
}

/// Card name usable as a file name stem.
#[must_use]
pub fn safe_file_name(name: &str) -> String {
    REGEX_COLLECTION
        .unsafe_file_chars
        .replace_all(name, "_")
        .to_string()
}
