//! Integration tests against the live lyrics API.

// Only runs with `--features integration_test`; needs network access.
#![cfg(feature = "integration_test")]
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::time::Instant;

use lirik_sentimen::acquisition::http::CatalogEntry;
use lirik_sentimen::acquisition::{acquire, AcquisitionQuery, HttpSource};
use lirik_sentimen::config::Config;

fn setup_source(catalog: Vec<CatalogEntry>) -> Option<HttpSource> {
    match Config::load() {
        Ok(config) => Some(HttpSource::new(&config.base_url, catalog).unwrap()),
        Err(e) => {
            println!("Skipping integration test: Failed to load config: {e}");
            None
        }
    }
}

#[tokio::test]
async fn test_fetch_known_song() {
    let catalog = vec![CatalogEntry { title: "Yellow".into(), artist: "Coldplay".into() }];
    let Some(source) = setup_source(catalog) else { return };

    let start = Instant::now();
    let records = acquire(&source, &AcquisitionQuery::all(1)).await.unwrap();
    println!("Fetched {} song(s) in {:?}", records.len(), start.elapsed());

    // The public API is flaky; an empty result is a skip, not a failure.
    if let Some(record) = records.first() {
        assert_eq!(record.artist(), "Coldplay");
        assert!(!record.lyrics().trim().is_empty());
    }
}

#[tokio::test]
async fn test_unknown_song_is_skipped() {
    let catalog = vec![CatalogEntry {
        title: "Lagu Yang Tidak Pernah Ada 9f2c".into(),
        artist: "Penyanyi Fiktif".into(),
    }];
    let Some(source) = setup_source(catalog) else { return };

    let records = acquire(&source, &AcquisitionQuery::all(5)).await.unwrap();
    assert!(records.is_empty());
}
