//! Lyrics read from a local CSV file.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;

use crate::acquisition::{AcquisitionQuery, LyricsSource};
use crate::error::{Error, Result};
use crate::types::LyricRecord;

/// One input row; extra columns are ignored and missing lyrics are empty.
#[derive(Debug, Deserialize)]
struct CsvRow {
    title: String,
    artist: String,
    #[serde(default)]
    lyrics: String,
}

/// Reads `title,artist,lyrics` rows from a CSV file with a header.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Source backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every valid row. Malformed rows are logged and skipped.
    pub fn read_all(&self) -> Result<Vec<LyricRecord>> {
        let file = fs_err::File::open(&self.path).map_err(|e| Error::io(e, self.path.clone()))?;
        // Rows may omit the trailing lyrics field.
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let mut records = Vec::new();
        for (idx, row) in reader.deserialize::<CsvRow>().enumerate() {
            // Header is line 1.
            let line = idx + 2;
            let record = row
                .map_err(Error::from)
                .and_then(|r| LyricRecord::new(r.title, r.artist, r.lyrics));
            match record {
                Ok(r) => records.push(r),
                Err(e) => tracing::warn!("Skipping {} line {line}: {e}", self.path.display()),
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl LyricsSource for CsvSource {
    async fn fetch(&self, query: &AcquisitionQuery) -> Result<Vec<LyricRecord>> {
        Ok(query.apply(self.read_all()?))
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_rows_and_skips_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title,artist,lyrics").unwrap();
        writeln!(file, "Kangen,Dewa 19,\"Semua kata rindumu, semakin membuatku\"").unwrap();
        writeln!(file, ",Tanpa Judul,lirik").unwrap();
        writeln!(file, "Separuh Aku,Noah,\"Dan terjadi lagi\"").unwrap();

        let source = CsvSource::new(file.path());
        let records = source.fetch(&AcquisitionQuery::all(10)).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].lyrics(), "Semua kata rindumu, semakin membuatku");
        assert_eq!(records[1].artist(), "Noah");
    }

    #[test]
    fn test_row_without_lyrics_field_is_kept() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title,artist,lyrics").unwrap();
        writeln!(file, "Bintang,Padi").unwrap();
        writeln!(file, "Kangen,Dewa 19,Semua kata rindumu").unwrap();

        let records = CsvSource::new(file.path()).read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), "Bintang");
        assert_eq!(records[0].lyrics(), "");
        assert_eq!(records[1].lyrics(), "Semua kata rindumu");
    }

    #[tokio::test]
    async fn test_missing_file_is_fatal() {
        let source = CsvSource::new("/tmp/nonexistent_lirik_input.csv");
        assert!(matches!(
            source.fetch(&AcquisitionQuery::default()).await,
            Err(Error::Io { .. })
        ));
    }
}
