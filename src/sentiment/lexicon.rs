//! Valence lexicon and the loaders that provide it.
//!
//! Loading is an explicit step: the binary calls [`initialize`] once at
//! start-up and hands the resulting [`Lexicon`] to the scorer. Any other
//! [`LexiconLoader`], such as an in-memory one built with
//! [`Lexicon::from_pairs`], can be injected the same way.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Bundled English valence lexicon.
const EMBEDDED_LEXICON: &str = include_str!("lexicon.tsv");

/// Words that strengthen the following valence.
const BOOSTERS_UP: &[&str] = &[
    "absolutely", "completely", "deeply", "enormously", "entirely", "especially",
    "extremely", "fully", "greatly", "highly", "incredibly", "really", "so",
    "such", "super", "too", "totally", "truly", "utterly", "very",
];

/// Words that weaken the following valence.
const BOOSTERS_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally",
    "partly", "scarcely", "slightly", "somewhat", "sorta",
];

/// Negations, in their normalized (apostrophe-free) spelling.
const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "neither", "never", "no", "nobody",
    "none", "nor", "not", "nothing", "nowhere", "shouldnt", "wasnt", "werent",
    "without", "wont", "wouldnt",
];

/// Direction of a booster word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Booster {
    /// Intensifier ("very").
    Up,
    /// Dampener ("slightly").
    Down,
}

/// Word valences on a -4..4 scale.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse the tab-separated lexicon format.
    ///
    /// Each non-blank, non-`#` line is `word<TAB>valence`, optionally followed by
    /// further columns which are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut valences = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut cols = line.split('\t');
            let word = cols.next().map(str::trim).unwrap_or_default();
            if word.is_empty() {
                return Err(Error::lexicon(line_no, "missing word"));
            }
            let raw = cols
                .next()
                .ok_or_else(|| Error::lexicon(line_no, format!("missing valence for {word:?}")))?;
            let valence: f64 = raw.trim().parse().map_err(|e| {
                Error::lexicon(line_no, format!("invalid valence {raw:?} for {word:?}: {e}"))
            })?;
            if !valence.is_finite() {
                return Err(Error::lexicon(line_no, format!("non-finite valence for {word:?}")));
            }

            valences.insert(word.to_lowercase(), valence);
        }

        Ok(Self { valences })
    }

    /// Build a lexicon from explicit pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            valences: pairs.into_iter().map(|(w, v)| (w.to_lowercase(), v)).collect(),
        }
    }

    /// Valence of a lowercase word, if listed.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Booster direction of a word, if it is one.
    pub fn booster(word: &str) -> Option<Booster> {
        if BOOSTERS_UP.contains(&word) {
            Some(Booster::Up)
        } else if BOOSTERS_DOWN.contains(&word) {
            Some(Booster::Down)
        } else {
            None
        }
    }

    /// Whether a word negates what follows.
    pub fn is_negation(word: &str) -> bool {
        NEGATIONS.contains(&word)
    }

    /// Number of scored words.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Whether no words are scored.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

/// Supplies the lexicon used by the scorer.
pub trait LexiconLoader {
    /// Load the lexicon. Called once per run.
    fn load(&self) -> Result<Lexicon>;

    /// Short description for logging.
    fn describe(&self) -> String;
}

/// The lexicon compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLexicon;

impl LexiconLoader for EmbeddedLexicon {
    fn load(&self) -> Result<Lexicon> {
        Lexicon::parse(EMBEDDED_LEXICON)
    }

    fn describe(&self) -> String {
        "embedded English lexicon".to_string()
    }
}

/// A lexicon file on disk, in the same tab-separated format.
#[derive(Debug, Clone)]
pub struct FileLexicon {
    path: PathBuf,
}

impl FileLexicon {
    /// Loader for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LexiconLoader for FileLexicon {
    fn load(&self) -> Result<Lexicon> {
        let text = fs_err::read_to_string(&self.path)
            .map_err(|e| Error::io(e, self.path.clone()))?;
        Lexicon::parse(&text).map_err(|e| match e {
            Error::Lexicon { line, message, .. } => Error::Lexicon {
                path: Some(self.path.clone()),
                line,
                message,
            },
            other => other,
        })
    }

    fn describe(&self) -> String {
        format!("lexicon file {}", self.path.display())
    }
}

/// Run a loader and log what was loaded.
pub fn initialize(loader: &dyn LexiconLoader) -> Result<Lexicon> {
    let lexicon = loader.load()?;
    tracing::info!("Loaded {} lexicon words from {}", lexicon.len(), loader.describe());
    if lexicon.is_empty() {
        tracing::warn!("Lexicon is empty; every text will score Neutral");
    }
    Ok(lexicon)
}
