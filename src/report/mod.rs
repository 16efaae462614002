//! Aggregates and exports over the labeled table.

pub mod export;

pub use export::{export_csv, read_csv, read_header, ExportRow};

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classifier::ClassificationReport;
use crate::error::{Error, Result};
use crate::types::{LabeledRecord, Sentiment};

/// How many records fell in each class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    /// Count per class; every class is present, possibly with zero.
    pub counts: BTreeMap<Sentiment, usize>,
    /// Total records.
    pub total: usize,
}

impl SentimentDistribution {
    /// Count classes over the table.
    pub fn from_records(records: &[LabeledRecord]) -> Self {
        let mut counts: BTreeMap<Sentiment, usize> =
            Sentiment::all().iter().map(|&s| (s, 0)).collect();
        for r in records {
            *counts.entry(r.sentiment()).or_insert(0) += 1;
        }
        Self { counts, total: records.len() }
    }

    /// Records in a class.
    pub fn count(&self, class: Sentiment) -> usize {
        self.counts.get(&class).copied().unwrap_or(0)
    }

    /// Share of records in a class, `0..=100`; zero for an empty table.
    pub fn percentage(&self, class: Sentiment) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(class) as f64 * 100.0 / self.total as f64
        }
    }
}

impl fmt::Display for SentimentDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &class in Sentiment::all() {
            writeln!(f, "{:<10} {:>5} ({:>5.1}%)", class.name(), self.count(class), self.percentage(class))?;
        }
        Ok(())
    }
}

/// Mean lexicon polarity of one artist's songs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistPolarity {
    /// Artist name.
    pub artist: String,
    /// Mean polarity over the artist's songs.
    pub mean_polarity: f64,
    /// Number of songs averaged.
    pub songs: usize,
}

/// Per-artist mean polarity, highest first; ties by artist name.
pub fn artist_ranking(records: &[LabeledRecord]) -> Vec<ArtistPolarity> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = sums.entry(r.artist()).or_insert((0.0, 0));
        entry.0 += r.polarity().value();
        entry.1 += 1;
    }

    let mut ranking: Vec<ArtistPolarity> = sums
        .into_iter()
        .map(|(artist, (sum, songs))| ArtistPolarity {
            artist: artist.to_string(),
            mean_polarity: sum / songs as f64,
            songs,
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.mean_polarity
            .total_cmp(&a.mean_polarity)
            .then_with(|| a.artist.cmp(&b.artist))
    });
    ranking
}

/// One point for a plotting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    /// Lexicon class.
    pub sentiment: Sentiment,
    /// Lexicon polarity.
    pub sentiment_score: f64,
    /// Performing artist.
    pub artist: String,
}

/// Project the table to the columns a plot needs.
pub fn plot_frame(records: &[LabeledRecord]) -> Vec<PlotPoint> {
    records
        .iter()
        .map(|r| PlotPoint {
            sentiment: r.sentiment(),
            sentiment_score: r.polarity().value(),
            artist: r.artist().to_string(),
        })
        .collect()
}

/// Everything a run reports, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// When the summary was produced.
    pub generated_at: DateTime<Utc>,
    /// Class distribution.
    pub distribution: SentimentDistribution,
    /// Artist ranking by mean polarity.
    pub artists: Vec<ArtistPolarity>,
    /// Held-out evaluation, if a model was trained.
    pub evaluation: Option<ClassificationReport>,
}

impl RunSummary {
    /// Summarize a labeled table and optional evaluation.
    pub fn new(records: &[LabeledRecord], evaluation: Option<ClassificationReport>) -> Self {
        Self {
            generated_at: Utc::now(),
            distribution: SentimentDistribution::from_records(records),
            artists: artist_ranking(records),
            evaluation,
        }
    }

    /// Write as pretty JSON, replacing any existing file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = fs_err::File::create(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        serde_json::to_writer_pretty(file, self)?;
        tracing::info!("Wrote run summary to {}", path.display());
        Ok(())
    }
}
