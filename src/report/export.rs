//! CSV export of the labeled table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::report::CSV_COLUMNS;
use crate::error::{Error, Result};
use crate::types::{LabeledRecord, Sentiment};

/// One exported row, columns in header order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Song title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Raw lyrics.
    pub lyrics: String,
    /// Normalized lyrics.
    pub cleaned_lyrics: String,
    /// Lexicon class.
    pub sentiment: Sentiment,
    /// Lexicon polarity.
    pub sentiment_score: f64,
}

impl From<&LabeledRecord> for ExportRow {
    fn from(r: &LabeledRecord) -> Self {
        Self {
            title: r.title().to_string(),
            artist: r.artist().to_string(),
            lyrics: r.lyrics().to_string(),
            cleaned_lyrics: r.cleaned_text().to_string(),
            sentiment: r.sentiment(),
            sentiment_score: r.polarity().value(),
        }
    }
}

/// Write every record to `path`, replacing any existing file.
///
/// The header row is always written, even for an empty table.
pub fn export_csv(records: &[LabeledRecord], path: &Path) -> Result<()> {
    let file = fs_err::File::create(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(CSV_COLUMNS)?;

    for record in records {
        writer.serialize(ExportRow::from(record))?;
    }
    writer.flush().map_err(|e| Error::io(e, path.to_path_buf()))?;

    tracing::info!("Exported {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Column names of an exported file, in order.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let mut reader = csv::Reader::from_reader(file);
    Ok(reader.headers()?.iter().map(str::to_string).collect())
}

/// Read an exported file back.
pub fn read_csv(path: &Path) -> Result<Vec<ExportRow>> {
    let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let mut reader = csv::Reader::from_reader(file);
    reader
        .deserialize()
        .map(|row| row.map_err(Error::from))
        .collect()
}
