//! Application constants.
//!
//! Centralizes thresholds and model defaults.

/// Lexical sentiment scoring constants.
pub mod sentiment {
    /// Polarity strictly above this is `Positive`.
    pub const POSITIVE_THRESHOLD: f64 = 0.05;

    /// Polarity strictly below this is `Negative`.
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Normalization constant for the compound score `s / sqrt(s^2 + alpha)`.
    pub const COMPOUND_ALPHA: f64 = 15.0;

    /// Valence added by an intensifying booster word.
    pub const BOOSTER_INCREMENT: f64 = 0.293;

    /// Valence removed by a dampening booster word.
    pub const BOOSTER_DECREMENT: f64 = -0.293;

    /// Multiplier applied to a valence preceded by a negation.
    pub const NEGATION_SCALAR: f64 = -0.74;

    /// How many preceding tokens are checked for boosters and negations.
    pub const LOOKBACK_WINDOW: usize = 3;

    /// Booster damping by distance from the lexicon word.
    pub const BOOSTER_DAMPING: [f64; LOOKBACK_WINDOW] = [1.0, 0.95, 0.9];

    /// Weight of valences before a contrastive "but".
    pub const BEFORE_BUT_WEIGHT: f64 = 0.5;

    /// Weight of valences after a contrastive "but".
    pub const AFTER_BUT_WEIGHT: f64 = 1.5;
}

/// Classifier training constants.
pub mod training {
    /// Fraction of each class held out for evaluation.
    pub const DEFAULT_TEST_RATIO: f64 = 0.2;

    /// Seed for the shuffled train/test split.
    pub const DEFAULT_SEED: u64 = 42;

    /// Vocabulary cap for the TF-IDF vectorizer.
    pub const DEFAULT_MAX_FEATURES: usize = 5000;

    /// Additive smoothing for naive Bayes.
    pub const DEFAULT_ALPHA: f64 = 1.0;

    /// Shortest token the vectorizer keeps.
    pub const MIN_TOKEN_LEN: usize = 2;

    /// Smallest per-class count that can be split into train and test.
    pub const MIN_SAMPLES_PER_CLASS: usize = 2;
}

/// Acquisition constants.
pub mod acquisition {
    /// Default cap on fetched songs.
    pub const DEFAULT_MAX_SONGS: usize = 50;

    /// Minimum skim score for a fuzzy artist match.
    pub const MIN_ARTIST_SCORE: i64 = 80;

    /// Request timeout for the HTTP lyrics backend, in seconds.
    pub const HTTP_TIMEOUT_SECS: u64 = 30;

    /// Default HTTP lyrics endpoint.
    pub const DEFAULT_BASE_URL: &str = "https://api.lyrics.ovh/v1";
}

/// Report output constants.
pub mod report {
    /// Default CSV export file name.
    pub const DEFAULT_OUTPUT_FILE: &str = "lyrics_sentiment.csv";

    /// Export header, in column order.
    pub const CSV_COLUMNS: [&str; 6] = [
        "title",
        "artist",
        "lyrics",
        "cleaned_lyrics",
        "sentiment",
        "sentiment_score",
    ];
}
