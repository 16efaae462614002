//! Lyrics normalizer.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{LyricRecord, NormalizedRecord};

/// Anything that is not an ASCII letter or whitespace.
#[allow(clippy::expect_used)]
static RE_NON_ALPHA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z\s]").expect("valid regex: RE_NON_ALPHA")
});

/// Runs of whitespace, including newlines between lyric lines.
#[allow(clippy::expect_used)]
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("valid regex: RE_WHITESPACE")
});

/// Lowercase, drop non-letters, collapse whitespace, trim.
///
/// Never fails: empty or fully non-Latin input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let letters = RE_NON_ALPHA.replace_all(&lower, "");
    RE_WHITESPACE.replace_all(&letters, " ").trim().to_string()
}

/// Attach cleaned lyrics to a record.
pub fn normalize_record(record: LyricRecord) -> NormalizedRecord {
    let cleaned_text = normalize(record.lyrics());
    NormalizedRecord { record, cleaned_text }
}

/// Split already-normalized text into words.
pub fn tokens(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned.split(' ').filter(|t| !t.is_empty())
}
