//! Lyrics acquisition.
//!
//! The pipeline only sees the [`LyricsSource`] trait, so tests and demo runs
//! can swap the network backend for fixed rows.

pub mod csv_source;
pub mod http;
pub mod sample;

pub use csv_source::CsvSource;
pub use http::HttpSource;
pub use sample::SampleSource;

use async_trait::async_trait;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::constants::acquisition::{DEFAULT_MAX_SONGS, MIN_ARTIST_SCORE};
use crate::error::Result;
use crate::types::LyricRecord;

/// What to fetch: an optional artist filter and a cap on item count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionQuery {
    /// Only songs by a matching artist, if set.
    pub artist: Option<String>,
    /// Maximum number of records returned.
    pub max_items: usize,
}

impl Default for AcquisitionQuery {
    fn default() -> Self {
        Self { artist: None, max_items: DEFAULT_MAX_SONGS }
    }
}

impl AcquisitionQuery {
    /// Query for every artist, capped at `max_items`.
    pub const fn all(max_items: usize) -> Self {
        Self { artist: None, max_items }
    }

    /// Query for one artist, capped at `max_items`.
    pub fn artist(artist: impl Into<String>, max_items: usize) -> Self {
        Self { artist: Some(artist.into()), max_items }
    }

    /// Whether an artist passes the filter.
    ///
    /// Case-insensitive substring match wins outright; otherwise a fuzzy match
    /// must reach a minimum quality.
    pub fn admits(&self, artist: &str) -> bool {
        let Some(filter) = self.artist.as_deref().map(str::trim).filter(|f| !f.is_empty()) else {
            return true;
        };

        let artist_lower = artist.to_lowercase();
        let filter_lower = filter.to_lowercase();
        if artist_lower.contains(&filter_lower) {
            return true;
        }

        SkimMatcherV2::default()
            .fuzzy_match(&artist_lower, &filter_lower)
            .is_some_and(|score| score >= MIN_ARTIST_SCORE)
    }

    /// Apply the filter and cap to already-fetched records.
    pub fn apply(&self, records: Vec<LyricRecord>) -> Vec<LyricRecord> {
        records
            .into_iter()
            .filter(|r| self.admits(r.artist()))
            .take(self.max_items)
            .collect()
    }
}

/// A backend producing raw lyric records.
#[async_trait]
pub trait LyricsSource: Send + Sync {
    /// Fetch records for the query.
    ///
    /// Per-item failures are logged and skipped; an `Err` means the whole
    /// source is unusable.
    async fn fetch(&self, query: &AcquisitionQuery) -> Result<Vec<LyricRecord>>;

    /// Get the name of this source (for logging).
    fn name(&self) -> &'static str;
}

/// Fetch from a source and enforce the query on whatever it returns.
pub async fn acquire(source: &dyn LyricsSource, query: &AcquisitionQuery) -> Result<Vec<LyricRecord>> {
    tracing::info!(
        "Acquiring up to {} songs from {} (artist filter: {})",
        query.max_items,
        source.name(),
        query.artist.as_deref().unwrap_or("none")
    );
    let records = query.apply(source.fetch(query).await?);
    tracing::info!("Acquired {} songs", records.len());
    Ok(records)
}
