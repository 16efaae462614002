//! Supervised sentiment classifier trained on lexicon labels.
//!
//! Pipeline: stratified split, TF-IDF on the training partition, multinomial
//! naive Bayes, then a classification report on the held-out partition.

pub mod metrics;
pub mod model;
pub mod naive_bayes;
pub mod split;
pub mod vectorizer;

pub use metrics::ClassificationReport;
pub use model::{ClassifierModel, Prediction};
pub use split::{stratified_split, Split};
pub use vectorizer::TfIdfVectorizer;

use crate::constants::training::{DEFAULT_ALPHA, DEFAULT_MAX_FEATURES, DEFAULT_SEED, DEFAULT_TEST_RATIO};
use crate::error::{Error, Result};
use crate::types::{LabeledRecord, Sentiment};

/// Knobs for [`train`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingOptions {
    /// Fraction of each class held out, in `(0, 1)`.
    pub test_ratio: f64,
    /// Split shuffle seed.
    pub seed: u64,
    /// Vocabulary cap.
    pub max_features: usize,
    /// Naive-Bayes additive smoothing, `> 0`.
    pub alpha: f64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            test_ratio: DEFAULT_TEST_RATIO,
            seed: DEFAULT_SEED,
            max_features: DEFAULT_MAX_FEATURES,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl TrainingOptions {
    /// Reject values the trainer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.test_ratio > 0.0 && self.test_ratio < 1.0) {
            return Err(Error::config(
                format!("test ratio {} is outside (0, 1)", self.test_ratio),
                "Set LIRIK_TEST_RATIO to a fraction such as 0.2",
            ));
        }
        if self.max_features == 0 {
            return Err(Error::config(
                "max features is 0",
                "Set LIRIK_MAX_FEATURES to a positive vocabulary size",
            ));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(Error::config(
                format!("smoothing alpha {} must be positive", self.alpha),
                "Use the default alpha of 1.0",
            ));
        }
        Ok(())
    }
}

/// A trained model with its held-out evaluation.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// Model fitted on the training partition.
    pub model: ClassifierModel,
    /// Scores on the held-out partition.
    pub report: ClassificationReport,
    /// Rows used for fitting.
    pub train_size: usize,
    /// Rows held out.
    pub test_size: usize,
}

/// Train on `(cleaned_text, class)` pairs.
pub fn train(examples: &[(&str, Sentiment)], options: &TrainingOptions) -> Result<TrainingOutcome> {
    options.validate()?;

    let labels: Vec<Sentiment> = examples.iter().map(|(_, l)| *l).collect();
    let split = stratified_split(&labels, options.test_ratio, options.seed)?;

    let (train_texts, train_labels): (Vec<&str>, Vec<Sentiment>) =
        split.train.iter().map(|&i| examples[i]).unzip();
    let (test_texts, test_labels): (Vec<&str>, Vec<Sentiment>) =
        split.test.iter().map(|&i| examples[i]).unzip();

    let model = ClassifierModel::fit(&train_texts, &train_labels, options)?;
    let predicted: Vec<Sentiment> = test_texts
        .iter()
        .map(|text| model.predict_cleaned(text).label)
        .collect();
    let report = ClassificationReport::evaluate(&test_labels, &predicted);

    tracing::info!(
        "Trained on {} rows ({} features), held out {}; accuracy {:.3}",
        train_texts.len(),
        model.vectorizer().n_features(),
        test_texts.len(),
        report.accuracy
    );

    Ok(TrainingOutcome {
        model,
        report,
        train_size: train_texts.len(),
        test_size: test_texts.len(),
    })
}

/// Train on labeled records, using their cleaned text and lexicon class.
pub fn train_on_records(records: &[LabeledRecord], options: &TrainingOptions) -> Result<TrainingOutcome> {
    let examples: Vec<(&str, Sentiment)> = records
        .iter()
        .map(|r| (r.cleaned_text(), r.sentiment()))
        .collect();
    train(&examples, options)
}
