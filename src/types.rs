//! Core record types for the lyrics pipeline.
//!
//! Records are created once by acquisition and only ever extended: a
//! [`LyricRecord`] gains cleaned text to become a [`NormalizedRecord`], which
//! gains a polarity score and class to become a [`LabeledRecord`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::sentiment::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use crate::error::{Error, Result};

/// Discrete sentiment class derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Favorable tone.
    Positive,
    /// Unfavorable tone.
    Negative,
    /// Neither, or no lexicon evidence.
    Neutral,
}

impl Sentiment {
    /// Returns all sentiment variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Positive, Self::Negative, Self::Neutral]
    }

    /// Returns the human-readable name of this class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Bucket a polarity score. Both thresholds are exclusive.
    #[must_use]
    pub fn from_polarity(polarity: Polarity) -> Self {
        let score = polarity.value();
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Continuous sentiment score in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Polarity(f64);

impl Polarity {
    /// The neutral score.
    pub const ZERO: Self = Self(0.0);

    /// Create a polarity, rejecting non-finite or out-of-range values.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (-1.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidRecord(format!("polarity {value} outside [-1, 1]")))
        }
    }

    /// Create a polarity by clamping into range. NaN maps to zero.
    #[must_use]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(-1.0, 1.0))
        }
    }

    /// Get the inner score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Polarity {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Polarity> for f64 {
    fn from(p: Polarity) -> Self {
        p.0
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// A song as delivered by an acquisition backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricRecord {
    title: String,
    artist: String,
    lyrics: String,
}

impl LyricRecord {
    /// Create a record. Title and artist must be non-blank; lyrics may be empty.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        lyrics: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into().trim().to_string();
        let artist = artist.into().trim().to_string();
        if title.is_empty() {
            return Err(Error::InvalidRecord(format!("blank title for artist {artist:?}")));
        }
        if artist.is_empty() {
            return Err(Error::InvalidRecord(format!("blank artist for title {title:?}")));
        }
        Ok(Self { title, artist, lyrics: lyrics.into() })
    }

    /// Song title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Performing artist.
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Raw lyrics text.
    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }
}

/// A record with its cleaned lyrics attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// The source record.
    pub record: LyricRecord,
    /// Output of the lyrics normalizer.
    pub cleaned_text: String,
}

/// A normalized record with its lexical sentiment label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRecord {
    normalized: NormalizedRecord,
    polarity: Polarity,
    sentiment: Sentiment,
}

impl LabeledRecord {
    /// Attach a polarity; the class is always derived from it.
    pub fn new(normalized: NormalizedRecord, polarity: Polarity) -> Self {
        Self {
            normalized,
            polarity,
            sentiment: Sentiment::from_polarity(polarity),
        }
    }

    /// Song title.
    pub fn title(&self) -> &str {
        self.normalized.record.title()
    }

    /// Performing artist.
    pub fn artist(&self) -> &str {
        self.normalized.record.artist()
    }

    /// Raw lyrics text.
    pub fn lyrics(&self) -> &str {
        self.normalized.record.lyrics()
    }

    /// Normalized lyrics text.
    pub fn cleaned_text(&self) -> &str {
        &self.normalized.cleaned_text
    }

    /// Lexical polarity score.
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Class bucketed from the polarity.
    pub const fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}
