//! `lirik-sentimen` - sentiment analysis of Indonesian song lyrics.
//!
//! Acquires lyrics, normalizes them, labels them with a lexical polarity
//! scorer, trains a TF-IDF + naive-Bayes classifier on those labels, and
//! reports the results.

pub mod acquisition;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod types;
