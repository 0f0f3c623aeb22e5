//! Page-text analysis.
//!
//! [`TextAnalyzer`] turns one page's visible text into a [`ContentAnalysis`]:
//! word/character/sentence/paragraph counts plus ranked single-word,
//! two-word and three-word frequency tables.
//!
//! Analysis is a pure, synchronous function of its input. It never fails:
//! empty or very short text produces zero counts and empty tables.

use std::sync::Arc;

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ConfigResult;
use crate::frequency::{FrequencyTable, NgramOrder, TableLimits, frequency_table};
use crate::stopwords::StopWordSet;
use crate::text;
use crate::tokenizer::{Alphabet, Tokenizer};

/// Reading speed used for the reading-time estimate when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// One page's text as handed over by the extractor.
///
/// `text` is expected to be whitespace-normalized already (single spaces, no
/// tabs or newlines, trimmed). Use [`PageText::from_raw`] when it is not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PageText {
    /// Visible body text of the page.
    pub text: String,
    /// Number of block-level paragraphs the extractor counted.
    pub paragraph_count: usize,
}

impl PageText {
    /// Wrap text that is already normalized.
    pub fn new(text: impl Into<String>, paragraph_count: usize) -> Self {
        Self {
            text: text.into(),
            paragraph_count,
        }
    }

    /// Normalize whitespace in `raw` before wrapping it.
    pub fn from_raw(raw: &str, paragraph_count: usize) -> Self {
        Self::new(text::normalize_whitespace(raw), paragraph_count)
    }
}

/// Result of analyzing one page: a snapshot that search runs against.
///
/// Serializes with camelCase keys. Every field defaults to zero/empty, so a
/// partial document deserializes to a usable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentAnalysis {
    /// Tokens left after stop-word filtering.
    pub word_count: usize,
    /// Characters in the normalized text.
    pub char_count: usize,
    /// Paragraph count passed through from the extractor.
    pub paragraph_count: usize,
    /// Runs of `.`, `!` or `?` in the text.
    pub sentence_count: usize,
    /// Estimated reading time, rounded up to whole minutes.
    pub reading_time_minutes: usize,
    /// Top single words.
    pub single_words: FrequencyTable,
    /// Top repeated two-word phrases.
    pub double_words: FrequencyTable,
    /// Top repeated three-word phrases.
    pub triple_words: FrequencyTable,
}

impl ContentAnalysis {
    /// The table holding n-grams of `order`.
    pub const fn table(&self, order: NgramOrder) -> &FrequencyTable {
        match order {
            NgramOrder::Single => &self.single_words,
            NgramOrder::Double => &self.double_words,
            NgramOrder::Triple => &self.triple_words,
        }
    }
}

/// Analyzes page text against a shared, immutable stop-word set.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    stop_words: Arc<StopWordSet>,
    tokenizer: Tokenizer,
    limits: TableLimits,
    words_per_minute: u32,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(StopWordSet::builtin().clone()))
    }
}

impl TextAnalyzer {
    /// Create an analyzer with default alphabet, limits and reading speed.
    pub fn new(stop_words: Arc<StopWordSet>) -> Self {
        Self {
            stop_words,
            tokenizer: Tokenizer::default(),
            limits: TableLimits::default(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Build an analyzer from configuration, loading its stop-word list.
    ///
    /// Relative stop-word file paths resolve against `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Utf8Path) -> ConfigResult<Self> {
        let stop_words = StopWordSet::from_config(&config.stop_words, base_dir)?;
        Ok(Self::new(Arc::new(stop_words))
            .with_alphabet(config.alphabet)
            .with_limits(config.tables)
            .with_words_per_minute(
                config
                    .words_per_minute
                    .unwrap_or(DEFAULT_WORDS_PER_MINUTE),
            ))
    }

    /// Use a different token alphabet.
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.tokenizer = Tokenizer::new(alphabet);
        self
    }

    /// Use different top-N table sizes.
    pub const fn with_limits(mut self, limits: TableLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Use a different reading speed. Zero is treated as one.
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute.max(1);
        self
    }

    /// The stop-word set shared by every analysis run.
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// The tokenizer in use.
    pub const fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    /// Tokenize and drop stop words, preserving order.
    pub fn filtered_words(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|w| !self.stop_words.contains(w))
            .collect()
    }

    /// Analyze one page.
    #[tracing::instrument(skip_all, fields(text_len = page.text.len(), paragraphs = page.paragraph_count))]
    pub fn analyze(&self, page: &PageText) -> ContentAnalysis {
        let words = self.filtered_words(&page.text);
        let word_count = words.len();

        let table = |order: NgramOrder| frequency_table(&words, order, self.limits.for_order(order));

        let analysis = ContentAnalysis {
            word_count,
            char_count: page.text.chars().count(),
            paragraph_count: page.paragraph_count,
            sentence_count: text::count_sentences(&page.text),
            reading_time_minutes: word_count.div_ceil(self.words_per_minute as usize),
            single_words: table(NgramOrder::Single),
            double_words: table(NgramOrder::Double),
            triple_words: table(NgramOrder::Triple),
        };

        tracing::debug!(
            word_count,
            single = analysis.single_words.len(),
            double = analysis.double_words.len(),
            triple = analysis.triple_words.len(),
            "page text analyzed"
        );
        analysis
    }
}

/// Analyze `text` with default settings and the given stop words.
///
/// Convenience over [`TextAnalyzer`] for one-off calls.
pub fn analyze(text: &str, paragraph_count: usize, stop_words: &StopWordSet) -> ContentAnalysis {
    TextAnalyzer::new(Arc::new(stop_words.clone())).analyze(&PageText::new(text, paragraph_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer_with(stop: &[&str]) -> TextAnalyzer {
        TextAnalyzer::new(Arc::new(StopWordSet::from_words(stop.iter().copied())))
    }

    #[test]
    fn stop_word_scenario() {
        let analyzer = analyzer_with(&["the", "on"]);
        assert_eq!(
            analyzer.filtered_words("the cat sat on the mat the cat ran"),
            vec!["cat", "sat", "mat", "cat", "ran"]
        );

        let result = analyzer.analyze(&PageText::new("the cat sat on the mat the cat ran", 1));
        assert_eq!(result.word_count, 5);
        let top = &result.single_words.entries()[0];
        assert_eq!(top.key, "cat");
        assert_eq!(top.count, 2);
        assert_eq!(top.percentage, "40.00");
    }

    #[test]
    fn empty_text_yields_zero_report() {
        let result = analyze("", 0, StopWordSet::builtin());
        assert_eq!(result, ContentAnalysis::default());
    }

    #[test]
    fn only_stop_words_yields_empty_tables() {
        let result = analyze("The and the. Or the!", 2, StopWordSet::builtin());
        assert_eq!(result.word_count, 0);
        assert!(result.single_words.is_empty());
        assert!(result.double_words.is_empty());
        assert!(result.triple_words.is_empty());
        assert_eq!(result.sentence_count, 2);
        assert_eq!(result.paragraph_count, 2);
        assert_eq!(result.reading_time_minutes, 0);
    }

    #[test]
    fn short_text_has_no_phrases() {
        let result = analyze("SEO audit", 1, &StopWordSet::empty());
        assert_eq!(result.word_count, 2);
        assert_eq!(result.single_words.len(), 2);
        assert!(result.double_words.is_empty());
        assert!(result.triple_words.is_empty());
    }

    #[test]
    fn scalar_stats() {
        let text = "SEO matters. Does it? Yes!!! Сайт жақсы...";
        let result = analyze(text, 3, &StopWordSet::empty());
        assert_eq!(result.char_count, text.chars().count());
        assert_eq!(result.sentence_count, 4);
        assert_eq!(result.paragraph_count, 3);
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "seo tips seo tools seo tips page speed page speed matters seo tips";
        let a = analyze(text, 1, StopWordSet::builtin());
        let b = analyze(text, 1, StopWordSet::builtin());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn unigram_percentages_are_bounded() {
        let text = "alpha beta gamma alpha delta alpha epsilon zeta eta theta iota kappa \
                    lambda alpha beta omicron rho sigma tau upsilon phi chi psi omega alpha";
        let result = analyze(text, 1, &StopWordSet::empty());
        let mut sum = 0.0;
        for entry in &result.single_words {
            let pct: f64 = entry.percentage.parse().unwrap();
            assert!(pct > 0.0 && pct <= 100.0);
            sum += pct;
        }
        assert!(sum <= 100.0 + 1e-9);
        assert_eq!(result.single_words.len(), 20);
    }

    #[test]
    fn phrases_appearing_once_are_dropped() {
        let result = analyze(
            "seo tips seo tips seo tools",
            1,
            &StopWordSet::empty(),
        );
        assert!(result.double_words.get("seo tools").is_none());
        assert_eq!(result.double_words.get("seo tips").map(|e| e.count), Some(2));
        for entry in result.double_words.iter().chain(&result.triple_words) {
            assert!(entry.count > 1);
        }
    }

    #[test]
    fn phrase_components_meet_minimum_length() {
        let text = "Go to an SEO page. An SEO page is ok. Go to an SEO page.";
        let result = analyze(text, 1, &StopWordSet::empty());
        for entry in result
            .single_words
            .iter()
            .chain(&result.double_words)
            .chain(&result.triple_words)
        {
            for part in entry.key.split(' ') {
                assert!(part.chars().count() >= 3, "{}", entry.key);
            }
        }
        assert!(result.double_words.get("seo page").is_some());
    }

    #[test]
    fn reading_time_rounds_up() {
        let text = vec!["keyword"; 201].join(" ");
        let result = analyze(&text, 1, &StopWordSet::empty());
        assert_eq!(result.reading_time_minutes, 2);

        let slow = TextAnalyzer::new(Arc::new(StopWordSet::empty())).with_words_per_minute(100);
        assert_eq!(slow.analyze(&PageText::new(text, 1)).reading_time_minutes, 3);
    }

    #[test]
    fn limits_and_alphabet_are_configurable() {
        let analyzer = TextAnalyzer::new(Arc::new(StopWordSet::empty()))
            .with_alphabet(Alphabet::Latin)
            .with_limits(TableLimits {
                single: 2,
                double: 1,
                triple: 1,
            });
        let result = analyzer.analyze(&PageText::new("seo сайт audit seo audit report", 1));
        assert_eq!(result.word_count, 5);
        assert_eq!(result.single_words.len(), 2);
        assert_eq!(result.single_words.entries()[0].key, "seo");
    }

    #[test]
    fn from_raw_normalizes_whitespace() {
        let page = PageText::from_raw("  SEO\n\n\ttips  ", 2);
        assert_eq!(page.text, "SEO tips");
        assert_eq!(page.paragraph_count, 2);
    }

    #[test]
    fn from_config_applies_settings() {
        let config = Config {
            alphabet: Alphabet::Cyrillic,
            words_per_minute: Some(50),
            stop_words: crate::config::StopWordsConfig {
                extra: vec!["сайт".to_string()],
                ..Default::default()
            },
            ..Config::default()
        };

        let analyzer = TextAnalyzer::from_config(&config, Utf8Path::new(".")).unwrap();
        assert_eq!(analyzer.tokenizer().alphabet(), Alphabet::Cyrillic);
        assert!(analyzer.stop_words().contains("сайт"));
        assert!(analyzer.stop_words().contains("для"));
        assert_eq!(analyzer.filtered_words("сайт для SEO оптимизация"), vec!["оптимизация"]);
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let result = analyze("seo seo", 1, &StopWordSet::empty());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["wordCount"], 2);
        assert_eq!(json["readingTimeMinutes"], 1);
        assert_eq!(json["singleWords"][0]["key"], "seo");
        assert!(json["doubleWords"].as_array().unwrap().is_empty());
    }

    #[test]
    fn partial_snapshot_defaults_missing_fields() {
        let snapshot: ContentAnalysis =
            serde_json::from_str(r#"{ "wordCount": 3, "singleWords": [] }"#).unwrap();
        assert_eq!(snapshot.word_count, 3);
        assert_eq!(snapshot.sentence_count, 0);
        assert!(snapshot.triple_words.is_empty());
    }
}
