//! Tag cloud over link anchor texts.
//!
//! Unlike body analysis, link texts are not stop-word filtered: navigation
//! labels are short and the repeated words are the signal.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::count_in_order;
use crate::tokenizer::Tokenizer;

/// Maximum number of tags in a cloud.
pub const TAG_CLOUD_LIMIT: usize = 15;

/// Largest display size bucket.
pub const MAX_TAG_SIZE: u8 = 5;

/// A word repeated across link texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LinkTag {
    /// The lower-cased word.
    pub tag: String,
    /// Occurrences across all link texts.
    pub count: usize,
    /// Display bucket from 1 to [`MAX_TAG_SIZE`], half the count rounded up.
    pub size: u8,
}

/// Build a tag cloud from link texts.
///
/// Words seen only once are dropped. Tags are ranked by count, ties in order
/// of first appearance, and capped at [`TAG_CLOUD_LIMIT`].
pub fn tag_cloud<I, S>(texts: I, tokenizer: Tokenizer) -> Vec<LinkTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words = texts
        .into_iter()
        .flat_map(|text| tokenizer.tokenize(text.as_ref()));

    let mut counts: Vec<(String, usize)> = count_in_order(words)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TAG_CLOUD_LIMIT);

    counts
        .into_iter()
        .map(|(tag, count)| LinkTag {
            size: tag_size(count),
            tag,
            count,
        })
        .collect()
}

fn tag_size(count: usize) -> u8 {
    let half = count.div_ceil(2).clamp(1, usize::from(MAX_TAG_SIZE));
    u8::try_from(half).unwrap_or(MAX_TAG_SIZE)
}
