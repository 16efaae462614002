//! Multinomial naive Bayes over sparse TF-IDF rows.

use crate::classifier::vectorizer::SparseRow;
use crate::constants::training::DEFAULT_ALPHA;
use crate::error::{Error, Result};
use crate::types::Sentiment;

/// Fitted multinomial naive-Bayes parameters.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    /// Classes seen in training, in `Sentiment` order.
    classes: Vec<Sentiment>,
    /// `ln P(class)` per class.
    class_log_prior: Vec<f64>,
    /// `ln P(feature | class)` per class, dense over features.
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit with the default smoothing.
    pub fn fit(rows: &[SparseRow], labels: &[Sentiment], n_features: usize) -> Result<Self> {
        Self::fit_with_alpha(rows, labels, n_features, DEFAULT_ALPHA)
    }

    /// Fit with additive smoothing `alpha`.
    ///
    /// `P(feature | class) = (weight_sum + alpha) / (class_total + alpha * n_features)`.
    pub fn fit_with_alpha(
        rows: &[SparseRow],
        labels: &[Sentiment],
        n_features: usize,
        alpha: f64,
    ) -> Result<Self> {
        if rows.len() != labels.len() {
            return Err(Error::Msg(format!(
                "{} feature rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut classes: Vec<Sentiment> = labels.to_vec();
        classes.sort_unstable();
        classes.dedup();

        let total_docs = labels.len() as f64;
        let mut class_log_prior = Vec::with_capacity(classes.len());
        let mut feature_log_prob = Vec::with_capacity(classes.len());

        for &class in &classes {
            let mut counts = vec![0.0; n_features];
            let mut docs = 0usize;
            for (row, _) in rows.iter().zip(labels).filter(|(_, &l)| l == class) {
                docs += 1;
                for &(idx, weight) in row {
                    counts[idx] += weight;
                }
            }

            let total: f64 = counts.iter().sum::<f64>() + alpha * n_features as f64;
            class_log_prior.push((docs as f64 / total_docs).ln());
            feature_log_prob.push(counts.into_iter().map(|c| ((c + alpha) / total).ln()).collect());
        }

        Ok(Self { classes, class_log_prior, feature_log_prob })
    }

    /// Classes the model can predict.
    pub fn classes(&self) -> &[Sentiment] {
        &self.classes
    }

    /// Unnormalized `ln P(class) + sum(x_i * ln P(i | class))` per class.
    fn joint_log_likelihood(&self, row: &SparseRow) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior + row.iter().map(|&(idx, x)| x * log_probs[idx]).sum::<f64>()
            })
            .collect()
    }

    /// Posterior probability per class, in [`Self::classes`] order.
    pub fn predict_proba(&self, row: &SparseRow) -> Vec<(Sentiment, f64)> {
        let jll = self.joint_log_likelihood(row);
        let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = jll.iter().map(|v| (v - max).exp()).collect();
        let sum: f64 = exps.iter().sum();

        self.classes
            .iter()
            .zip(exps)
            .map(|(&class, e)| (class, e / sum))
            .collect()
    }

    /// Most probable class; ties go to the earlier class.
    pub fn predict(&self, row: &SparseRow) -> Sentiment {
        argmax(&self.predict_proba(row))
    }
}

/// First class with the highest probability.
pub(crate) fn argmax(probabilities: &[(Sentiment, f64)]) -> Sentiment {
    probabilities
        .iter()
        .fold(None::<(Sentiment, f64)>, |best, &(class, p)| match best {
            Some((_, bp)) if bp >= p => best,
            _ => Some((class, p)),
        })
        .map_or(Sentiment::Neutral, |(class, _)| class)
}
