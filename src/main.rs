//! `lirik-sentimen` - label, classify and report on song lyrics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use lirik_sentimen::config::{expand_path, Config, SourceKind};
use lirik_sentimen::pipeline::Pipeline;
use lirik_sentimen::report::export_csv;
use lirik_sentimen::sentiment;

fn parse_path(s: &str) -> std::result::Result<PathBuf, String> {
    if s.trim().is_empty() {
        return Err("path must not be empty".to_string());
    }
    Ok(expand_path(s))
}

/// Command-line overrides for the environment configuration.
#[derive(Parser, Debug)]
#[command(version, about)]
struct CliArgs {
    /// Acquisition backend.
    #[clap(long, value_enum)]
    source: Option<SourceKind>,

    /// Input CSV (`title,artist,lyrics`) for the csv source.
    #[clap(long, value_parser = parse_path)]
    input: Option<PathBuf>,

    /// Catalog CSV (`title,artist`) for the http source.
    #[clap(long, value_parser = parse_path)]
    catalog: Option<PathBuf>,

    /// Base URL of the HTTP lyrics API.
    #[clap(long)]
    base_url: Option<String>,

    /// Only songs by this artist.
    #[clap(short, long)]
    artist: Option<String>,

    /// Maximum songs to acquire.
    #[clap(short = 'n', long)]
    max_songs: Option<usize>,

    /// CSV file for the labeled table (overwritten).
    #[clap(short, long, value_parser = parse_path)]
    output: Option<PathBuf>,

    /// JSON file for the run summary (overwritten).
    #[clap(long, value_parser = parse_path)]
    summary: Option<PathBuf>,

    /// Tab-separated valence lexicon replacing the embedded one.
    #[clap(long, value_parser = parse_path)]
    lexicon: Option<PathBuf>,

    /// Seed for the train/test split.
    #[clap(long)]
    seed: Option<u64>,

    /// Texts to classify with the trained model after the run.
    #[clap(short, long = "predict")]
    predict: Vec<String>,
}

impl CliArgs {
    fn apply(self, config: &mut Config) -> Vec<String> {
        if let Some(source) = self.source {
            config.source = source;
        }
        if self.input.is_some() {
            config.input_path = self.input;
        }
        if self.catalog.is_some() {
            config.catalog_path = self.catalog;
        }
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        if self.artist.is_some() {
            config.artist = self.artist;
        }
        if let Some(max) = self.max_songs {
            config.max_songs = max;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if self.summary.is_some() {
            config.summary_path = self.summary;
        }
        if self.lexicon.is_some() {
            config.lexicon_path = self.lexicon;
        }
        if let Some(seed) = self.seed {
            config.training.seed = seed;
        }
        self.predict
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = CliArgs::parse();
    let mut config = Config::load().context("Failed to load configuration")?;
    let to_predict = args.apply(&mut config);
    tracing::info!("{} {}", config.app_name(), config.app_version());

    let lexicon = sentiment::initialize(config.lexicon_loader().as_ref())
        .context("Failed to load sentiment lexicon")?;
    let source = config.build_source().context("Failed to set up lyrics source")?;

    let pipeline = Pipeline::new(lexicon, config.training.clone());
    let output = pipeline
        .run(source.as_ref(), &config.query())
        .await
        .context("Sentiment pipeline failed")?;

    let summary = output.summary();
    println!("=== Sentiment distribution ({} songs) ===", summary.distribution.total);
    print!("{}", summary.distribution);

    println!("\n=== Mean polarity by artist ===");
    for artist in &summary.artists {
        println!("  {:+.3}  {} ({} songs)", artist.mean_polarity, artist.artist, artist.songs);
    }

    println!(
        "\n=== Classifier ({} train / {} test) ===",
        output.training.train_size, output.training.test_size
    );
    print!("{}", output.training.report);

    export_csv(&output.records, &config.output_path)
        .with_context(|| format!("Failed to export {}", config.output_path.display()))?;
    if let Some(path) = &config.summary_path {
        summary
            .write_json(path)
            .with_context(|| format!("Failed to write summary {}", path.display()))?;
    }

    if !to_predict.is_empty() {
        println!("\n=== Predictions ===");
    }
    for text in &to_predict {
        let prediction = output.training.model.predict(text);
        let probs = prediction
            .probabilities
            .iter()
            .map(|(class, p)| format!("{class}={p:.3}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:<8} [{probs}] {text:?}", prediction.label.name());
    }

    Ok(())
}
