//! Lexical polarity scorer.

use crate::constants::sentiment::{
    AFTER_BUT_WEIGHT, BEFORE_BUT_WEIGHT, BOOSTER_DAMPING, BOOSTER_DECREMENT, BOOSTER_INCREMENT,
    COMPOUND_ALPHA, LOOKBACK_WINDOW, NEGATION_SCALAR,
};
use crate::lyrics::tokens;
use crate::sentiment::lexicon::{Booster, Lexicon};
use crate::types::Polarity;

/// Scores normalized text against a valence lexicon.
///
/// Valences are summed with booster, negation and "but" adjustments, then
/// squashed into `[-1, 1]` with `s / sqrt(s^2 + alpha)`.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl SentimentScorer {
    /// Create a scorer over a loaded lexicon.
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Polarity of already-normalized text. No lexicon hits scores exactly zero.
    pub fn polarity(&self, cleaned: &str) -> Polarity {
        let words: Vec<&str> = tokens(cleaned).collect();
        let but_at = words.iter().position(|w| *w == "but");

        // `sum` over no floats is -0.0; start from +0.0 instead.
        let total: f64 = words
            .iter()
            .enumerate()
            .filter_map(|(i, word)| {
                let valence = self.word_valence(&words, i, word)?;
                Some(match but_at {
                    Some(b) if i < b => valence * BEFORE_BUT_WEIGHT,
                    Some(b) if i > b => valence * AFTER_BUT_WEIGHT,
                    _ => valence,
                })
            })
            .fold(0.0, |acc, v| acc + v);

        Polarity::saturating(total / total.mul_add(total, COMPOUND_ALPHA).sqrt())
    }

    /// Valence of `words[i]` after booster and negation context.
    fn word_valence(&self, words: &[&str], i: usize, word: &str) -> Option<f64> {
        if Lexicon::booster(word).is_some() {
            return None;
        }
        let mut valence = self.lexicon.valence(word)?;

        for (dist, damping) in (1..=LOOKBACK_WINDOW).zip(BOOSTER_DAMPING) {
            let Some(j) = i.checked_sub(dist) else { break };
            if let Some(booster) = Lexicon::booster(words[j]) {
                let mut step = match booster {
                    Booster::Up => BOOSTER_INCREMENT,
                    Booster::Down => BOOSTER_DECREMENT,
                };
                if valence < 0.0 {
                    step = -step;
                }
                valence += step * damping;
            }
        }

        let window = &words[i.saturating_sub(LOOKBACK_WINDOW)..i];
        if window.iter().any(|w| Lexicon::is_negation(w)) {
            valence *= NEGATION_SCALAR;
        }

        Some(valence)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::lyrics::normalize;
    use crate::sentiment::lexicon::{EmbeddedLexicon, LexiconLoader};

    fn scorer() -> SentimentScorer {
        SentimentScorer::new(EmbeddedLexicon.load().unwrap())
    }

    #[test]
    fn test_happy_sentence_is_positive() {
        let cleaned = normalize("I am so happy today");
        assert_eq!(cleaned, "i am so happy today");
        assert!(scorer().polarity(&cleaned).value() > 0.05);
    }

    #[test]
    fn test_sad_sentence_is_negative() {
        assert!(scorer().polarity("i cry alone in the dark").value() < -0.05);
    }

    #[test]
    fn test_no_hits_is_zero() {
        let s = scorer();
        assert!(s.polarity("").value().abs() < f64::EPSILON);
        assert!(s.polarity("aku sedih sekali").value().abs() < f64::EPSILON);
        assert!(!s.polarity("").value().is_sign_negative());
        assert!(!s.polarity("semua kata rindumu").value().is_sign_negative());
    }

    #[test]
    fn test_booster_strengthens() {
        let s = scorer();
        let plain = s.polarity("i am happy").value();
        let boosted = s.polarity("i am very happy").value();
        let damped = s.polarity("i am slightly happy").value();
        assert!(boosted > plain);
        assert!(damped < plain);

        let sad = s.polarity("i am sad").value();
        let very_sad = s.polarity("i am very sad").value();
        assert!(very_sad < sad);
    }

    #[test]
    fn test_negation_flips() {
        let s = scorer();
        assert!(s.polarity("i am happy").value() > 0.0);
        assert!(s.polarity("i am not happy").value() < 0.0);
        assert!(s.polarity("dont cry").value() > 0.0);
    }

    #[test]
    fn test_but_shifts_weight() {
        let s = scorer();
        let score = s.polarity("you were sweet but you lied and hurt me").value();
        assert!(score < 0.0);
    }

    #[test]
    fn test_score_in_range() {
        let s = scorer();
        let text = "love ".repeat(500);
        let p = s.polarity(text.trim()).value();
        assert!(p > 0.99 && p <= 1.0);
    }
}
