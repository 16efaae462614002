//! Lexical sentiment labeling.
//!
//! The scorer is built for English valence lexicons. Indonesian lyrics mostly
//! miss the lexicon and land near zero, so labels skew `Neutral`; swap in an
//! Indonesian lexicon through [`FileLexicon`] to change that.

pub mod lexicon;
pub mod scorer;

pub use lexicon::{initialize, EmbeddedLexicon, FileLexicon, Lexicon, LexiconLoader};
pub use scorer::SentimentScorer;

use crate::types::{LabeledRecord, NormalizedRecord};

/// Attaches polarity and class to normalized records.
#[derive(Debug, Clone)]
pub struct Labeler {
    scorer: SentimentScorer,
}

impl Labeler {
    /// Create a labeler over a scorer.
    pub const fn new(scorer: SentimentScorer) -> Self {
        Self { scorer }
    }

    /// Label one record.
    pub fn label(&self, normalized: NormalizedRecord) -> LabeledRecord {
        let polarity = self.scorer.polarity(&normalized.cleaned_text);
        tracing::debug!(
            "Scored {} - {}: {polarity}",
            normalized.record.artist(),
            normalized.record.title()
        );
        LabeledRecord::new(normalized, polarity)
    }

    /// Label a batch, preserving order.
    pub fn label_all(&self, records: Vec<NormalizedRecord>) -> Vec<LabeledRecord> {
        records.into_iter().map(|r| self.label(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::lyrics::normalize_record;
    use crate::types::{LyricRecord, Sentiment};

    #[test]
    fn test_label_all_preserves_order_and_classes() {
        let labeler = Labeler::new(SentimentScorer::new(EmbeddedLexicon.load().unwrap()));
        let records = vec![
            normalize_record(LyricRecord::new("A", "X", "I am so happy today").unwrap()),
            normalize_record(LyricRecord::new("B", "X", "Aku rindu padamu").unwrap()),
            normalize_record(LyricRecord::new("C", "Y", "Tears and pain, I hate this").unwrap()),
        ];

        let labeled = labeler.label_all(records);
        let classes: Vec<_> = labeled.iter().map(LabeledRecord::sentiment).collect();
        assert_eq!(classes, vec![Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]);
        assert_eq!(labeled[1].title(), "B");
    }
}
