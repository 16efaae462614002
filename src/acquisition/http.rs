//! HTTP lyrics backend.
//!
//! Looks up each catalog entry at `{base_url}/{artist}/{title}` and expects a
//! JSON body of the form `{"lyrics": "..."}`. Requests run one at a time.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::acquisition::{AcquisitionQuery, LyricsSource};
use crate::constants::acquisition::HTTP_TIMEOUT_SECS;
use crate::error::{Error, Result};
use crate::types::LyricRecord;

/// A song to look up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    /// Song title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
}

impl CatalogEntry {
    /// `artist - title`, for log messages.
    fn label(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    lyrics: String,
}

/// Fetches lyrics for a fixed catalog of songs over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: Url,
    catalog: Vec<CatalogEntry>,
    client: Client,
}

impl HttpSource {
    /// Create a source for `catalog` against `base_url`.
    pub fn new(base_url: &str, catalog: Vec<CatalogEntry>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            Error::config(
                format!("invalid lyrics base URL {base_url:?}: {e}"),
                "Set LIRIK_BASE_URL to an absolute http(s) URL",
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(
                format!("lyrics base URL {base_url} cannot take path segments"),
                "Set LIRIK_BASE_URL to an absolute http(s) URL",
            ));
        }

        Ok(Self {
            base_url,
            catalog,
            client: Client::builder()
                .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
        })
    }

    /// Create a source whose catalog is a `title,artist` CSV file.
    pub fn from_catalog_file(base_url: &str, path: &Path) -> Result<Self> {
        let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let catalog = csv::Reader::from_reader(file)
            .deserialize::<CatalogEntry>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::parse(format!("invalid catalog: {e}"), path.to_path_buf()))?;
        tracing::info!("Loaded {} catalog entries from {}", catalog.len(), path.display());
        Self::new(base_url, catalog)
    }

    /// Lookup URL for one entry, with artist and title percent-encoded.
    pub fn item_url(&self, entry: &CatalogEntry) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&entry.artist).push(&entry.title);
        }
        url
    }

    /// Fetch a single entry.
    async fn fetch_one(&self, entry: &CatalogEntry) -> Result<LyricRecord> {
        let url = self.item_url(entry);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request for {} failed: {e}", entry.label())))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::acquisition(entry.label(), format!("HTTP {status}")));
        }

        let body: LyricsResponse = resp
            .json()
            .await
            .map_err(|e| Error::acquisition(entry.label(), format!("invalid JSON: {e}")))?;

        LyricRecord::new(&entry.title, &entry.artist, body.lyrics)
    }
}

#[async_trait]
impl LyricsSource for HttpSource {
    async fn fetch(&self, query: &AcquisitionQuery) -> Result<Vec<LyricRecord>> {
        let mut records = Vec::new();

        for entry in self.catalog.iter().filter(|e| query.admits(&e.artist)) {
            if records.len() >= query.max_items {
                break;
            }
            match self.fetch_one(entry).await {
                Ok(record) => records.push(record),
                Err(e) if e.is_item_recoverable() => {
                    tracing::warn!("Skipping {}: {e}", entry.label());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(records)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn entry(title: &str, artist: &str) -> CatalogEntry {
        CatalogEntry { title: title.into(), artist: artist.into() }
    }

    #[test]
    fn test_item_url_encodes_segments() {
        let source = HttpSource::new("https://lyrics.example/v1/", Vec::new()).unwrap();
        let url = source.item_url(&entry("Separuh Aku", "Noah"));
        assert_eq!(url.as_str(), "https://lyrics.example/v1/Noah/Separuh%20Aku");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(HttpSource::new("not a url", Vec::new()), Err(Error::Config { .. })));
        assert!(matches!(HttpSource::new("mailto:x@example.com", Vec::new()), Err(Error::Config { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_items_are_skipped() {
        // Port 9 (discard) on loopback refuses connections.
        let catalog = vec![entry("Kangen", "Dewa 19"), entry("Bintang", "Padi")];
        let source = HttpSource::new("http://127.0.0.1:9/v1", catalog).unwrap();
        let records = source.fetch(&AcquisitionQuery::all(10)).await.unwrap();
        assert!(records.is_empty());
    }
}
