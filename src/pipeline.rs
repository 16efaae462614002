//! One run: acquire, normalize, label, train.

use crate::acquisition::{acquire, AcquisitionQuery, LyricsSource};
use crate::classifier::{train_on_records, TrainingOptions, TrainingOutcome};
use crate::error::Result;
use crate::lyrics::normalize_record;
use crate::report::RunSummary;
use crate::sentiment::{Labeler, Lexicon, SentimentScorer};
use crate::types::{LabeledRecord, LyricRecord};

/// Labeled table and trained model from one run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Every acquired song, labeled.
    pub records: Vec<LabeledRecord>,
    /// Model trained on the labels, with its evaluation.
    pub training: TrainingOutcome,
}

impl RunOutput {
    /// Aggregate report for this run.
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(&self.records, Some(self.training.report.clone()))
    }
}

/// Wires the pipeline stages together over one lexicon.
#[derive(Debug, Clone)]
pub struct Pipeline {
    labeler: Labeler,
    training: TrainingOptions,
}

impl Pipeline {
    /// Create a pipeline over a loaded lexicon.
    pub const fn new(lexicon: Lexicon, training: TrainingOptions) -> Self {
        Self {
            labeler: Labeler::new(SentimentScorer::new(lexicon)),
            training,
        }
    }

    /// Normalize and label raw records.
    pub fn label(&self, records: Vec<LyricRecord>) -> Vec<LabeledRecord> {
        let normalized = records.into_iter().map(normalize_record).collect();
        self.labeler.label_all(normalized)
    }

    /// Acquire from `source`, label, and train.
    pub async fn run(&self, source: &dyn LyricsSource, query: &AcquisitionQuery) -> Result<RunOutput> {
        let raw = acquire(source, query).await?;
        let records = self.label(raw);
        tracing::info!("Labeled {} songs", records.len());

        let training = train_on_records(&records, &self.training)?;
        Ok(RunOutput { records, training })
    }
}
