//! Canned analysis shown when page text cannot be extracted.

use crate::analyzer::ContentAnalysis;
use crate::frequency::{FrequencyEntry, FrequencyTable};

/// A fixed, plausible snapshot for previews and fallbacks.
///
/// The figures are illustrative only. Percentages use the snapshot's own
/// word count as the denominator for every table.
pub fn demo_analysis() -> ContentAnalysis {
    ContentAnalysis {
        word_count: 1247,
        char_count: 7856,
        paragraph_count: 15,
        sentence_count: 89,
        reading_time_minutes: 7,
        single_words: table(&[
            ("seo", 25, "2.00"),
            ("optimization", 18, "1.40"),
            ("page", 15, "1.20"),
            ("analysis", 12, "0.96"),
            ("search", 10, "0.80"),
        ]),
        double_words: table(&[
            ("seo optimization", 8, "0.64"),
            ("page analysis", 6, "0.48"),
            ("search engine", 5, "0.40"),
        ]),
        triple_words: table(&[
            ("search engine optimization", 4, "0.32"),
            ("page seo analysis", 3, "0.24"),
        ]),
    }
}

fn table(rows: &[(&str, usize, &str)]) -> FrequencyTable {
    FrequencyTable::new(
        rows.iter()
            .map(|&(key, count, percentage)| FrequencyEntry {
                key: key.to_string(),
                count,
                percentage: percentage.to_string(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search;

    #[test]
    fn demo_tables_are_ranked() {
        let demo = demo_analysis();
        for table in [&demo.single_words, &demo.double_words, &demo.triple_words] {
            let counts: Vec<_> = table.iter().map(|e| e.count).collect();
            let mut sorted = counts.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(counts, sorted);
        }
    }

    #[test]
    fn demo_is_searchable() {
        let hits = search(&demo_analysis(), "optim");
        let keys: Vec<_> = hits.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["optimization", "seo optimization", "search engine optimization"]
        );
    }

    #[test]
    fn demo_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(demo_analysis()).unwrap();
        assert_eq!(json["wordCount"], 1247);
        assert_eq!(json["readingTimeMinutes"], 7);
        assert_eq!(json["singleWords"][0]["percentage"], "2.00");
    }
}
