//! Word oracle - dictionary lookup behind a readiness gate
//!
//! The engine never holds a dictionary directly. It holds an [`OracleGate`],
//! which is `Loading` until a dictionary is installed and only then hands out
//! the oracle. Word search and confirms are refused until the gate is ready.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::DictionaryError;

/// Answers "is this a word". Implementations enforce their own length bounds.
pub trait WordOracle: Send + Sync {
    /// Case-insensitive membership test.
    fn is_valid_word(&self, word: &str) -> bool;

    fn min_len(&self) -> usize;

    fn max_len(&self) -> usize;
}

/// Built-in words, used when no dictionary file is configured.
pub const SAMPLE_WORDS: &[&str] = &[
    "cat", "dog", "hat", "bat", "rat", "sat", "mat", "fat", "pat", "run", "sun", "fun", "bun",
    "gun", "hut", "cut", "nut", "but", "rip", "sip", "tip", "lip", "hip", "dip", "nip", "zip",
    "pip", "cake", "make", "take", "lake", "fake", "sake", "wake", "bake", "time", "lime",
    "dime", "mime", "rime", "chime", "grime", "prime", "fish", "dish", "wish", "risk", "disk",
    "mask", "task", "dusk", "stare", "flare", "snare", "spare", "share", "scare", "glare",
    "place", "trace", "grace", "brace", "space", "plane", "flame", "house", "mouse", "louse",
    "greet", "sheet", "sweet", "fleet",
];

/// In-memory word set restricted to `min_len..=max_len`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    min_len: usize,
    max_len: usize,
}

impl Dictionary {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self {
            words: HashSet::new(),
            min_len,
            max_len,
        }
    }

    pub fn from_words<I, S>(words: I, min_len: usize, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new(min_len, max_len);
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    /// The built-in sample list.
    pub fn sample(min_len: usize, max_len: usize) -> Self {
        Self::from_words(SAMPLE_WORDS.iter().copied(), min_len, max_len)
    }

    /// Insert a word, trimmed and lowercased. Returns false when it is
    /// blank, out of bounds, not purely alphabetic, or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        let len = word.chars().count();
        if len < self.min_len || len > self.max_len {
            return false;
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        self.words.insert(word)
    }

    /// One word per line.
    pub fn parse_txt(text: &str, min_len: usize, max_len: usize) -> Result<Self, DictionaryError> {
        Self::from_words(text.lines(), min_len, max_len).non_empty()
    }

    /// A JSON array of strings (the `builddict` output format).
    pub fn parse_json(text: &str, min_len: usize, max_len: usize) -> Result<Self, DictionaryError> {
        let words: Vec<String> = serde_json::from_str(text)?;
        Self::from_words(words, min_len, max_len).non_empty()
    }

    /// Load from disk; `.json` files are parsed as arrays, anything else as text.
    pub fn load(path: impl AsRef<Path>, min_len: usize, max_len: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let dict = if is_json {
            Self::parse_json(&text, min_len, max_len)?
        } else {
            Self::parse_txt(&text, min_len, max_len)?
        };
        info!(
            path = %path.display(),
            words = dict.len(),
            "dictionary loaded ({}-{} letters)",
            min_len,
            max_len
        );
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order.
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    fn non_empty(self) -> Result<Self, DictionaryError> {
        if self.is_empty() {
            return Err(DictionaryError::Empty {
                min_len: self.min_len,
                max_len: self.max_len,
            });
        }
        Ok(self)
    }
}

impl WordOracle for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        let len = word.chars().count();
        if len < self.min_len || len > self.max_len {
            return false;
        }
        self.words.contains(&word.to_lowercase())
    }

    fn min_len(&self) -> usize {
        self.min_len
    }

    fn max_len(&self) -> usize {
        self.max_len
    }
}

/// Group words by length, then by first letter (each list sorted).
pub fn index_by_length_and_initial<'a>(
    words: impl IntoIterator<Item = &'a str>,
) -> BTreeMap<usize, BTreeMap<char, Vec<String>>> {
    let mut index: BTreeMap<usize, BTreeMap<char, Vec<String>>> = BTreeMap::new();
    for word in words {
        let Some(first) = word.chars().next() else {
            continue;
        };
        index
            .entry(word.chars().count())
            .or_default()
            .entry(first)
            .or_default()
            .push(word.to_string());
    }
    for by_initial in index.values_mut() {
        for list in by_initial.values_mut() {
            list.sort_unstable();
        }
    }
    index
}

/// Oracle availability as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Readiness gate in front of the oracle.
#[derive(Clone, Default)]
pub enum OracleGate {
    #[default]
    Loading,
    Ready(Arc<dyn WordOracle>),
    Failed(String),
}

impl OracleGate {
    pub fn ready_with(oracle: impl WordOracle + 'static) -> Self {
        OracleGate::Ready(Arc::new(oracle))
    }

    /// The oracle, only once it is ready.
    pub fn ready(&self) -> Option<&dyn WordOracle> {
        match self {
            OracleGate::Ready(oracle) => Some(oracle.as_ref()),
            OracleGate::Loading | OracleGate::Failed(_) => None,
        }
    }

    pub fn status(&self) -> OracleStatus {
        match self {
            OracleGate::Loading => OracleStatus::Loading,
            OracleGate::Ready(_) => OracleStatus::Ready,
            OracleGate::Failed(msg) => OracleStatus::Failed(msg.clone()),
        }
    }
}

impl std::fmt::Debug for OracleGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleGate::Loading => f.write_str("OracleGate::Loading"),
            OracleGate::Ready(oracle) => write!(
                f,
                "OracleGate::Ready({}-{})",
                oracle.min_len(),
                oracle.max_len()
            ),
            OracleGate::Failed(msg) => write!(f, "OracleGate::Failed({msg:?})"),
        }
    }
}

/// Loads a dictionary file on a background thread.
///
/// Poll with [`DictionaryLoader::try_take`] from the game loop.
pub struct DictionaryLoader {
    path: PathBuf,
    rx: Option<Receiver<Result<Dictionary, DictionaryError>>>,
}

impl DictionaryLoader {
    pub fn spawn(path: impl Into<PathBuf>, min_len: usize, max_len: usize) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();
        let thread_path = path.clone();
        std::thread::spawn(move || {
            let result = Dictionary::load(&thread_path, min_len, max_len);
            if let Err(ref err) = result {
                warn!(path = %thread_path.display(), "dictionary load failed: {err}");
            }
            // The receiver may be gone if the game quit first.
            let _ = tx.send(result);
        });
        Self { path, rx: Some(rx) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Some` exactly once, when loading has finished (or the loader died).
    pub fn try_take(&mut self) -> Option<Result<Dictionary, DictionaryError>> {
        let rx = self.rx.as_ref()?;
        let out = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(DictionaryError::Disconnected),
        };
        self.rx = None;
        Some(out)
    }

    /// Block until loading finishes.
    pub fn wait(mut self) -> Result<Dictionary, DictionaryError> {
        match self.rx.take() {
            Some(rx) => rx.recv().unwrap_or(Err(DictionaryError::Disconnected)),
            None => Err(DictionaryError::Disconnected),
        }
    }
}
