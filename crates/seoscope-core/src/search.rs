//! Search over an analysis snapshot.
//!
//! Only the retained top-N entries are searchable; counts beyond the
//! truncated tables are not kept in a [`ContentAnalysis`].

use crate::analyzer::ContentAnalysis;
use crate::frequency::{FrequencyEntry, NgramOrder};

/// Default number of hits returned by [`search`].
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Find words and phrases containing `term`, highest count first, at most
/// [`DEFAULT_SEARCH_LIMIT`] hits.
pub fn search(snapshot: &ContentAnalysis, term: &str) -> Vec<FrequencyEntry> {
    search_with_limit(snapshot, term, DEFAULT_SEARCH_LIMIT)
}

/// Like [`search`] with a caller-chosen hit limit.
///
/// `term` is trimmed and lower-cased; a blank term matches nothing. Hits from
/// the single, double and triple tables are merged in that order before a
/// stable sort by count, so equal counts favour shorter keys.
#[tracing::instrument(skip(snapshot))]
pub fn search_with_limit(
    snapshot: &ContentAnalysis,
    term: &str,
    limit: usize,
) -> Vec<FrequencyEntry> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    const ORDERS: [NgramOrder; 3] = [NgramOrder::Single, NgramOrder::Double, NgramOrder::Triple];
    let mut hits: Vec<FrequencyEntry> = ORDERS
        .into_iter()
        .flat_map(|order| snapshot.table(order).iter())
        .filter(|entry| entry.key.contains(&term))
        .cloned()
        .collect();

    hits.sort_by(|a, b| b.count.cmp(&a.count));
    hits.truncate(limit);
    tracing::debug!(hits = hits.len(), "snapshot searched");
    hits
}
