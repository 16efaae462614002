//! Held-out evaluation: per-class precision, recall and F1.

use std::fmt;

use serde::Serialize;

use crate::types::Sentiment;

/// Scores for one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMetrics {
    /// The class scored.
    pub class: Sentiment,
    /// Correct predictions of this class over all predictions of it.
    pub precision: f64,
    /// Correct predictions of this class over all true members of it.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// True members of this class in the evaluated set.
    pub support: usize,
}

/// Averaged scores across classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageMetrics {
    /// Mean precision.
    pub precision: f64,
    /// Mean recall.
    pub recall: f64,
    /// Mean F1.
    pub f1: f64,
}

/// Classification report for one evaluation set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    /// Per-class scores for every class seen in truth or predictions.
    pub classes: Vec<ClassMetrics>,
    /// Fraction of correct predictions.
    pub accuracy: f64,
    /// Unweighted mean over classes.
    pub macro_avg: AverageMetrics,
    /// Mean over classes weighted by support.
    pub weighted_avg: AverageMetrics,
    /// Number of evaluated rows.
    pub support: usize,
}

/// `num / den`, or zero when the denominator is zero.
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl ClassificationReport {
    /// Score predictions against the true labels.
    pub fn evaluate(truth: &[Sentiment], predicted: &[Sentiment]) -> Self {
        let mut present: Vec<Sentiment> = truth.iter().chain(predicted).copied().collect();
        present.sort_unstable();
        present.dedup();

        let pairs: Vec<(Sentiment, Sentiment)> =
            truth.iter().copied().zip(predicted.iter().copied()).collect();
        let total = pairs.len();

        let classes: Vec<ClassMetrics> = present
            .into_iter()
            .map(|class| {
                let tp = pairs.iter().filter(|&&(t, p)| t == class && p == class).count();
                let predicted_n = pairs.iter().filter(|&&(_, p)| p == class).count();
                let support = pairs.iter().filter(|&&(t, _)| t == class).count();
                let precision = ratio(tp, predicted_n);
                let recall = ratio(tp, support);
                let f1 = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };
                ClassMetrics { class, precision, recall, f1, support }
            })
            .collect();

        let correct = pairs.iter().filter(|(t, p)| t == p).count();
        let n_classes = classes.len().max(1) as f64;
        let macro_avg = AverageMetrics {
            precision: classes.iter().map(|c| c.precision).sum::<f64>() / n_classes,
            recall: classes.iter().map(|c| c.recall).sum::<f64>() / n_classes,
            f1: classes.iter().map(|c| c.f1).sum::<f64>() / n_classes,
        };
        let weight = |f: fn(&ClassMetrics) -> f64| {
            if total == 0 {
                0.0
            } else {
                classes.iter().map(|c| f(c) * c.support as f64).sum::<f64>() / total as f64
            }
        };
        let weighted_avg = AverageMetrics {
            precision: weight(|c| c.precision),
            recall: weight(|c| c.recall),
            f1: weight(|c| c.f1),
        };

        Self {
            classes,
            accuracy: ratio(correct, total),
            macro_avg,
            weighted_avg,
            support: total,
        }
    }

    /// Scores for one class, if it appeared.
    pub fn class(&self, class: Sentiment) -> Option<&ClassMetrics> {
        self.classes.iter().find(|c| c.class == class)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>14} {:>9} {:>9} {:>9} {:>9}", "", "precision", "recall", "f1-score", "support")?;
        writeln!(f)?;
        for c in &self.classes {
            writeln!(
                f,
                "{:>14} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                c.class.name(),
                c.precision,
                c.recall,
                c.f1,
                c.support
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:>14} {:>9} {:>9} {:>9.2} {:>9}", "accuracy", "", "", self.accuracy, self.support)?;
        for (name, avg) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>14} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                name, avg.precision, avg.recall, avg.f1, self.support
            )?;
        }
        Ok(())
    }
}
