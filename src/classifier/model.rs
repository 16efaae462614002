//! Trained model and prediction.

use serde::Serialize;

use crate::classifier::naive_bayes::{argmax, MultinomialNb};
use crate::classifier::vectorizer::TfIdfVectorizer;
use crate::classifier::TrainingOptions;
use crate::error::Result;
use crate::lyrics::normalize;
use crate::types::Sentiment;

/// Fitted vectorizer paired with the classifier trained on its features.
#[derive(Debug, Clone)]
pub struct ClassifierModel {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
}

/// Result of classifying one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Most probable class.
    pub label: Sentiment,
    /// Probability per model class, summing to one.
    pub probabilities: Vec<(Sentiment, f64)>,
}

impl Prediction {
    /// Probability assigned to a class; zero if the model never saw it.
    pub fn probability(&self, class: Sentiment) -> f64 {
        self.probabilities
            .iter()
            .find(|(c, _)| *c == class)
            .map_or(0.0, |(_, p)| *p)
    }
}

impl ClassifierModel {
    /// Fit vectorizer and classifier on already-normalized texts.
    pub fn fit(texts: &[&str], labels: &[Sentiment], options: &TrainingOptions) -> Result<Self> {
        let mut vectorizer = TfIdfVectorizer::new().with_max_features(options.max_features);
        let rows = vectorizer.fit_transform(texts);
        let classifier =
            MultinomialNb::fit_with_alpha(&rows, labels, vectorizer.n_features(), options.alpha)?;
        Ok(Self { vectorizer, classifier })
    }

    /// Classify raw text: normalize, vectorize without refitting, predict.
    pub fn predict(&self, text: &str) -> Prediction {
        self.predict_cleaned(&normalize(text))
    }

    /// Classify text that is already normalized.
    pub fn predict_cleaned(&self, cleaned: &str) -> Prediction {
        let row = self.vectorizer.transform(cleaned);
        let probabilities = self.classifier.predict_proba(&row);
        Prediction { label: argmax(&probabilities), probabilities }
    }

    /// Classes the model can predict.
    pub fn classes(&self) -> &[Sentiment] {
        self.classifier.classes()
    }

    /// The fitted vectorizer.
    pub const fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn corpus() -> (Vec<String>, Vec<Sentiment>) {
        let topics = [
            (Sentiment::Positive, ["bahagia", "senang", "ceria", "tertawa", "indah", "gembira"]),
            (Sentiment::Negative, ["sedih", "luka", "tangis", "perih", "hancur", "kecewa"]),
            (Sentiment::Neutral, ["jalan", "kota", "kereta", "pagi", "rumah", "jendela"]),
        ];
        let mut texts = Vec::new();
        let mut labels = Vec::new();
        for (label, words) in topics {
            for i in 0..10 {
                let mut doc: Vec<&str> = words.to_vec();
                doc.rotate_left(i % words.len());
                texts.push(doc.join(" "));
                labels.push(label);
            }
        }
        (texts, labels)
    }

    #[test]
    fn test_training_duplicate_predicts_training_label() {
        let (texts, labels) = corpus();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let model = ClassifierModel::fit(&refs, &labels, &TrainingOptions::default()).unwrap();

        for (text, &label) in texts.iter().zip(&labels).step_by(7) {
            let prediction = model.predict(text);
            assert_eq!(prediction.label, label);
            assert!(prediction.probability(label) > 0.9, "{text}: {prediction:?}");
        }
    }

    #[test]
    fn test_prediction_is_deterministic_and_normalized() {
        let (texts, labels) = corpus();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let model = ClassifierModel::fit(&refs, &labels, &TrainingOptions::default()).unwrap();

        let a = model.predict("Aku SEDIH, hatiku hancur!!");
        let b = model.predict("Aku SEDIH, hatiku hancur!!");
        assert_eq!(a, b);
        assert_eq!(a.label, Sentiment::Negative);
        let sum: f64 = a.probabilities.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(model.classes().len(), 3);
    }

    #[test]
    fn test_unknown_words_use_priors() {
        let refs = ["senang hati", "senang sekali", "sedih hati"];
        let labels = [Sentiment::Positive, Sentiment::Positive, Sentiment::Negative];
        let model = ClassifierModel::fit(&refs, &labels, &TrainingOptions::default()).unwrap();
        let prediction = model.predict("xyz qwerty");
        assert_eq!(prediction.label, Sentiment::Positive);
        assert!((prediction.probability(Sentiment::Positive) - 2.0 / 3.0).abs() < 1e-9);
        assert!(prediction.probability(Sentiment::Neutral).abs() < f64::EPSILON);
    }
}
