//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Command-line flags in the binary override whatever is loaded here.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::acquisition::{AcquisitionQuery, CsvSource, HttpSource, LyricsSource, SampleSource};
use crate::classifier::TrainingOptions;
use crate::constants::acquisition::{DEFAULT_BASE_URL, DEFAULT_MAX_SONGS};
use crate::constants::report::DEFAULT_OUTPUT_FILE;
use crate::error::{Error, Result};
use crate::sentiment::{EmbeddedLexicon, FileLexicon, LexiconLoader};

/// Which acquisition backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SourceKind {
    /// Built-in placeholder songs.
    #[default]
    Sample,
    /// Local `title,artist,lyrics` CSV file.
    Csv,
    /// HTTP lyrics API driven by a catalog file.
    Http,
}

impl SourceKind {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "sample" => Ok(Self::Sample),
            "csv" => Ok(Self::Csv),
            "http" => Ok(Self::Http),
            other => Err(Error::config(
                format!("unknown source {other:?}"),
                "Set LIRIK_SOURCE to one of: sample, csv, http",
            )),
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Acquisition backend
    pub source: SourceKind,
    /// Input CSV for the `csv` source
    pub input_path: Option<PathBuf>,
    /// Catalog CSV for the `http` source
    pub catalog_path: Option<PathBuf>,
    /// Base URL of the HTTP lyrics API
    pub base_url: String,
    /// Only songs by this artist
    pub artist: Option<String>,
    /// Maximum songs to acquire
    pub max_songs: usize,
    /// Where the labeled table is exported
    pub output_path: PathBuf,
    /// Where the JSON run summary is written, if anywhere
    pub summary_path: Option<PathBuf>,
    /// Lexicon file replacing the embedded lexicon
    pub lexicon_path: Option<PathBuf>,
    /// Classifier training knobs
    pub training: TrainingOptions,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            source: SourceKind::default(),
            input_path: None,
            catalog_path: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            artist: None,
            max_songs: DEFAULT_MAX_SONGS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            summary_path: None,
            lexicon_path: None,
            training: TrainingOptions::default(),
        }
    }
}

/// Expand `~` in a configured path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Parse a numeric variable, naming it in the error.
fn parse_var<T: std::str::FromStr>(name: &str, value: &str, hint: &'static str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("{name}={value:?} is not a valid number"), hint))
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup, starting from defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(source) = lookup("LIRIK_SOURCE") {
            config.source = SourceKind::parse(&source)?;
        }
        config.input_path = lookup("LIRIK_INPUT").map(|p| expand_path(&p));
        config.catalog_path = lookup("LIRIK_CATALOG").map(|p| expand_path(&p));
        if let Some(url) = lookup("LIRIK_BASE_URL") {
            config.base_url = url;
        }
        config.artist = lookup("LIRIK_ARTIST").filter(|a| !a.trim().is_empty());

        if let Some(max) = lookup("LIRIK_MAX_SONGS") {
            config.max_songs = parse_var("LIRIK_MAX_SONGS", &max, "Use a whole number of songs")?;
        }
        if let Some(path) = lookup("LIRIK_OUTPUT") {
            config.output_path = expand_path(&path);
        }
        config.summary_path = lookup("LIRIK_SUMMARY").map(|p| expand_path(&p));
        config.lexicon_path = lookup("LIRIK_LEXICON").map(|p| expand_path(&p));

        if let Some(seed) = lookup("LIRIK_SEED") {
            config.training.seed = parse_var("LIRIK_SEED", &seed, "Use a non-negative integer seed")?;
        }
        if let Some(ratio) = lookup("LIRIK_TEST_RATIO") {
            config.training.test_ratio =
                parse_var("LIRIK_TEST_RATIO", &ratio, "Use a fraction such as 0.2")?;
        }
        if let Some(max) = lookup("LIRIK_MAX_FEATURES") {
            config.training.max_features =
                parse_var("LIRIK_MAX_FEATURES", &max, "Use a positive vocabulary size")?;
        }

        config.training.validate()?;
        Ok(config)
    }

    /// The acquisition query this configuration describes.
    pub fn query(&self) -> AcquisitionQuery {
        AcquisitionQuery {
            artist: self.artist.clone(),
            max_items: self.max_songs,
        }
    }

    /// The lexicon loader: a configured file, or the embedded lexicon.
    pub fn lexicon_loader(&self) -> Box<dyn LexiconLoader> {
        match &self.lexicon_path {
            Some(path) => Box::new(FileLexicon::new(path.clone())),
            None => Box::new(EmbeddedLexicon),
        }
    }

    /// Construct the configured acquisition backend.
    pub fn build_source(&self) -> Result<Box<dyn LyricsSource>> {
        match self.source {
            SourceKind::Sample => Ok(Box::new(SampleSource)),
            SourceKind::Csv => {
                let path = self.input_path.clone().ok_or_else(|| {
                    Error::config("csv source needs an input file", "Set LIRIK_INPUT or pass --input")
                })?;
                Ok(Box::new(CsvSource::new(path)))
            }
            SourceKind::Http => {
                let path = self.catalog_path.as_deref().ok_or_else(|| {
                    Error::config("http source needs a catalog file", "Set LIRIK_CATALOG or pass --catalog")
                })?;
                Ok(Box::new(HttpSource::from_catalog_file(&self.base_url, path)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.source, SourceKind::Sample);
        assert_eq!(config.max_songs, DEFAULT_MAX_SONGS);
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.training, TrainingOptions::default());
        assert_eq!(config.app_name(), "lirik-sentimen");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LIRIK_SOURCE", "CSV"),
            ("LIRIK_INPUT", "/data/lirik.csv"),
            ("LIRIK_ARTIST", "Dewa 19"),
            ("LIRIK_MAX_SONGS", "10"),
            ("LIRIK_SEED", "7"),
            ("LIRIK_TEST_RATIO", "0.25"),
        ]))
        .unwrap();
        assert_eq!(config.source, SourceKind::Csv);
        assert_eq!(config.input_path, Some(PathBuf::from("/data/lirik.csv")));
        assert_eq!(config.query(), AcquisitionQuery::artist("Dewa 19", 10));
        assert_eq!(config.training.seed, 7);
        assert!((config.training.test_ratio - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("LIRIK_MAX_SONGS", "lots")])),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("LIRIK_SOURCE", "ftp")])),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("LIRIK_TEST_RATIO", "1.5")])),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_csv_source_requires_input() {
        let config = Config { source: SourceKind::Csv, ..Config::default() };
        assert!(matches!(config.build_source(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_blank_artist_is_no_filter() {
        let config = Config::from_lookup(lookup(&[("LIRIK_ARTIST", "  ")])).unwrap();
        assert_eq!(config.artist, None);
    }
}
