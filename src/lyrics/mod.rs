//! Lyrics text processing.
//!
//! Cleans raw lyric text into the lowercase, letters-and-spaces form that the
//! sentiment scorer and the vectorizer both consume.

pub mod normalize;

pub use normalize::{normalize, normalize_record, tokens};
