//! Stratified, seeded train/test split.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::constants::training::MIN_SAMPLES_PER_CLASS;
use crate::error::{Error, Result};
use crate::types::Sentiment;

/// Row indices of each partition, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Rows used for fitting.
    pub train: Vec<usize>,
    /// Held-out rows used for evaluation.
    pub test: Vec<usize>,
}

/// Split rows so every class keeps its share in both partitions.
///
/// Each class holds out `round(count * test_ratio)` rows, at least one and never
/// all of them. A class with fewer than two rows cannot be split and is an error.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn stratified_split(labels: &[Sentiment], test_ratio: f64, seed: u64) -> Result<Split> {
    if labels.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut by_class: BTreeMap<Sentiment, Vec<usize>> = BTreeMap::new();
    for (idx, &label) in labels.iter().enumerate() {
        by_class.entry(label).or_default().push(idx);
    }

    if let Some((&class, rows)) = by_class.iter().find(|(_, rows)| rows.len() < MIN_SAMPLES_PER_CLASS) {
        return Err(Error::InsufficientSamples { class, count: rows.len() });
    }
    if by_class.len() == 1 {
        tracing::warn!("Only one sentiment class present; the classifier will predict it for everything");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut split = Split { train: Vec::new(), test: Vec::new() };

    for mut rows in by_class.into_values() {
        rows.shuffle(&mut rng);
        let n_test = ((rows.len() as f64 * test_ratio).round() as usize).clamp(1, rows.len() - 1);
        split.test.extend_from_slice(&rows[..n_test]);
        split.train.extend_from_slice(&rows[n_test..]);
    }

    split.train.sort_unstable();
    split.test.sort_unstable();
    Ok(split)
}
