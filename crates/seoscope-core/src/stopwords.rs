//! Stop-word set management.
//!
//! The built-in list covers English, Russian and Kazakh function words.
//! A [`StopWordSet`] is built once (from the built-in list and any configured
//! additions/removals) and then shared read-only, usually behind an `Arc`.

use std::collections::HashSet;
use std::sync::LazyLock;

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::StopWordsConfig;
use crate::error::{ConfigError, ConfigResult};

/// Built-in English stop words.
pub const ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "this", "that", "these", "those", "is", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "do", "does", "did", "will", "would", "could", "should", "can", "may", "might",
    "must", "shall", "it", "its", "he", "she", "we", "they", "our", "your", "his", "her", "them",
    "us", "me", "you", "him", "all", "any", "each",
];

/// Built-in Russian stop words.
pub const RUSSIAN: &[&str] = &[
    "это", "как", "его", "она", "так", "но", "или", "что", "все", "были", "есть", "был", "для",
    "без", "при", "про", "над", "под", "том", "вам", "вас", "нас", "них", "еще", "уже", "где",
    "там", "тут", "чем", "эти", "эта", "этот",
];

/// Built-in Kazakh stop words.
pub const KAZAKH: &[&str] = &[
    "мен", "сен", "ол", "біз", "сіз", "олар", "және", "осы", "бұл", "сол", "деп", "еді", "үшін",
    "мұнда", "онда", "бар", "жоқ", "дейін", "кейін", "артық", "кем",
];

static BUILTIN: LazyLock<StopWordSet> = LazyLock::new(|| {
    StopWordSet::from_words(ENGLISH.iter().chain(RUSSIAN).chain(KAZAKH).copied())
});

/// An immutable set of lower-cased words excluded from frequency counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// The built-in multilingual stop-word set.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary words. Words are trimmed and lower-cased;
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Build the effective set described by `config`.
    ///
    /// Starts from the built-in list (unless `builtin = false`), adds `extra`
    /// and the words in `file`, then removes `allow`. A relative `file` is
    /// resolved against `base_dir`.
    #[tracing::instrument(skip(config), fields(builtin = config.builtin, extra = config.extra.len()))]
    pub fn from_config(config: &StopWordsConfig, base_dir: &Utf8Path) -> ConfigResult<Self> {
        let mut words = if config.builtin {
            Self::builtin().words.clone()
        } else {
            HashSet::new()
        };

        words.extend(config.extra.iter().filter_map(|w| normalize_word(w)));

        if let Some(ref file) = config.file {
            let path = resolve_path(file, base_dir);
            let content =
                std::fs::read_to_string(path.as_std_path()).map_err(|source| {
                    ConfigError::StopWordFile {
                        path: path.clone(),
                        source,
                    }
                })?;
            let before = words.len();
            words.extend(parse_word_list(&content));
            tracing::debug!(%path, added = words.len() - before, "loaded stop-word file");
        }

        for allowed in config.allow.iter().filter_map(|w| normalize_word(w)) {
            words.remove(&allowed);
        }

        tracing::debug!(size = words.len(), "stop-word set built");
        Ok(Self { words })
    }

    /// Whether `word` (already lower-cased) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, sorted.
    pub fn sorted(&self) -> Vec<&str> {
        let mut list: Vec<&str> = self.words.iter().map(String::as_str).collect();
        list.sort_unstable();
        list
    }
}

fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    (!word.is_empty()).then(|| word.to_lowercase())
}

/// One word per line; `#` starts a comment.
fn parse_word_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .filter_map(normalize_word)
}

fn resolve_path(path: &Utf8Path, base_dir: &Utf8Path) -> Utf8PathBuf {
    if path.is_relative() {
        base_dir.join(path)
    } else {
        path.to_path_buf()
    }
}
