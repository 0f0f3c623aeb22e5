//! N-gram frequency tables.
//!
//! Counts adjacent word sequences, ranks them by count and truncates to a
//! top-N. Ties keep first-appearance order, so the same input always yields
//! the same table.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One ranked word or phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyEntry {
    /// The word, or the phrase's words joined by single spaces.
    pub key: String,
    /// Occurrences in the filtered word sequence.
    pub count: usize,
    /// Share of all n-grams of this order, exactly two decimals (e.g. `"40.00"`).
    pub percentage: String,
}

/// Ranked entries, highest count first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FrequencyTable(Vec<FrequencyEntry>);

impl FrequencyTable {
    /// Wrap already-ranked entries.
    pub const fn new(entries: Vec<FrequencyEntry>) -> Self {
        Self(entries)
    }

    /// The entries in rank order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.0
    }

    /// Iterate entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.0.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&FrequencyEntry> {
        self.0.iter().find(|e| e.key == key)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Phrase length of a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramOrder {
    /// Single words.
    Single,
    /// Two-word phrases.
    Double,
    /// Three-word phrases.
    Triple,
}

impl NgramOrder {
    /// Number of words per key.
    pub const fn size(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Smallest count an entry needs to be kept. Phrases seen once are noise.
    pub const fn min_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double | Self::Triple => 2,
        }
    }
}

/// How many entries each table keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLimits {
    /// Single-word table size (default 20).
    pub single: usize,
    /// Two-word table size (default 15).
    pub double: usize,
    /// Three-word table size (default 10).
    pub triple: usize,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            single: 20,
            double: 15,
            triple: 10,
        }
    }
}

impl TableLimits {
    /// The limit for tables of `order`.
    pub const fn for_order(&self, order: NgramOrder) -> usize {
        match order {
            NgramOrder::Single => self.single,
            NgramOrder::Double => self.double,
            NgramOrder::Triple => self.triple,
        }
    }
}

/// Build the ranked table of `order`-grams over `words`.
///
/// The percentage denominator is the number of n-grams of that order
/// (`words.len() - order + 1`). Too few words for one n-gram gives an empty
/// table.
pub fn frequency_table(words: &[String], order: NgramOrder, limit: usize) -> FrequencyTable {
    let n = order.size();
    if words.len() < n {
        return FrequencyTable::default();
    }
    let denominator = words.len() - (n - 1);

    let mut ranked: Vec<(String, usize)> = count_in_order(words.windows(n).map(|w| w.join(" ")))
        .into_iter()
        .filter(|(_, count)| *count >= order.min_count())
        .collect();

    // Stable: equal counts keep first-appearance order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    FrequencyTable(
        ranked
            .into_iter()
            .map(|(key, count)| FrequencyEntry {
                key,
                count,
                percentage: format_percentage(count, denominator),
            })
            .collect(),
    )
}

/// Count keys, returning `(key, count)` in order of first appearance.
pub(crate) fn count_in_order<I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        if let Some(&i) = index.get(&key) {
            counts[i].1 += 1;
        } else {
            index.insert(key.clone(), counts.len());
            counts.push((key, 1));
        }
    }

    counts
}

/// `count / denominator * 100` with two decimals, rounding half up.
///
/// Integer arithmetic on the exact ratio, so results never depend on
/// floating-point representation. A zero denominator yields `"0.00"`.
pub fn format_percentage(count: usize, denominator: usize) -> String {
    if denominator == 0 {
        return "0.00".to_string();
    }
    let (count, denominator) = (count as u128, denominator as u128);
    let hundredths = (count * 20_000 + denominator) / (2 * denominator);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
