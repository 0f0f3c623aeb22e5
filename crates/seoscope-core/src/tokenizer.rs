//! Script-aware word tokenizer.
//!
//! A token is a maximal run of letters from the configured [`Alphabet`],
//! lower-cased, at least [`MIN_TOKEN_CHARS`] characters long. Everything else
//! (digits, punctuation, whitespace, letters outside the alphabet) separates
//! tokens.
//!
//! Letters outside the alphabet split a word rather than being dropped from
//! it, so `"café"` yields `"caf"`. Page text in the supported scripts rarely
//! hits this, and it keeps token boundaries predictable.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Shortest run of alphabet letters that counts as a word.
pub const MIN_TOKEN_CHARS: usize = 3;

const LATIN_CLASS: &str = "a-zA-Z";
const CYRILLIC_CLASS: &str = "а-яА-ЯёЁ";
/// Kazakh letters outside the Russian alphabet, both cases.
const KAZAKH_CLASS: &str = "әӘіІңҢғҒүҮұҰқҚөӨһҺ";

static MULTILINGUAL_RE: LazyLock<Regex> =
    LazyLock::new(|| word_regex(&[LATIN_CLASS, CYRILLIC_CLASS, KAZAKH_CLASS]));
static LATIN_RE: LazyLock<Regex> = LazyLock::new(|| word_regex(&[LATIN_CLASS]));
static CYRILLIC_RE: LazyLock<Regex> =
    LazyLock::new(|| word_regex(&[CYRILLIC_CLASS, KAZAKH_CLASS]));

fn word_regex(classes: &[&str]) -> Regex {
    let pattern = format!("[{}]{{{MIN_TOKEN_CHARS},}}", classes.concat());
    Regex::new(&pattern).expect("valid regex")
}

/// Which letters may appear inside a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Alphabet {
    /// Latin a–z, Russian Cyrillic (with ё) and the Kazakh extension letters.
    #[default]
    Multilingual,
    /// Latin a–z only.
    Latin,
    /// Russian Cyrillic (with ё) and the Kazakh extension letters.
    Cyrillic,
}

impl Alphabet {
    /// Returns the alphabet name as used in configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Multilingual => "multilingual",
            Self::Latin => "latin",
            Self::Cyrillic => "cyrillic",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Self::Multilingual => &MULTILINGUAL_RE,
            Self::Latin => &LATIN_RE,
            Self::Cyrillic => &CYRILLIC_RE,
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits text into lower-cased word tokens.
///
/// Cheap to copy; the compiled patterns are process-wide statics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    alphabet: Alphabet,
}

impl Tokenizer {
    /// Create a tokenizer for the given alphabet.
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet this tokenizer accepts.
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Tokenize `text`, preserving order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.alphabet
            .regex()
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
