use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Word occurrence counts for a single language, built in one pass over the
/// corpus and read-only afterwards. Never shared across languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u32>,
}

/// The highest-count entry of a table, used as the normalization denominator
/// when scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct MostCommonWord {
    pub word: String,
    pub count: u32,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every occurrence: a sentence with "the the" contributes 2 to
    /// "the". Calling this twice for the same question double-counts.
    pub fn record<S: AsRef<str>>(&mut self, tokens: &[S]) {
        for token in tokens {
            *self.counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
    }

    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Ties break toward the lexicographically smaller word so the result is
    /// deterministic across runs.
    pub fn most_common(&self) -> Option<MostCommonWord> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(word, count)| MostCommonWord { word: word.clone(), count: *count })
    }

    /// All entries, most frequent first, ties in lexicographic order.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::FrequencyTable;

    #[test]
    fn duplicates_count_every_occurrence() {
        let mut table = FrequencyTable::new();
        table.record(&["the", "the", "cat"]);

        assert_eq!(table.count("the"), 2);
        assert_eq!(table.count("cat"), 1);
        assert_eq!(table.count("dog"), 0);
    }

    #[test]
    fn recording_twice_double_counts() {
        let tokens = vec!["go".to_string(), "fast".to_string()];

        let mut table = FrequencyTable::new();
        table.record(&tokens);
        table.record(&tokens);

        assert_eq!(table.count("go"), 2);
        assert_eq!(table.count("fast"), 2);
    }

    #[test]
    fn most_common_breaks_ties_lexicographically() {
        let mut table = FrequencyTable::new();
        table.record(&["b", "a", "b", "a", "c"]);

        let most_common = table.most_common().unwrap();
        assert_eq!(most_common.word, "a");
        assert_eq!(most_common.count, 2);
    }

    #[test]
    fn most_common_of_empty_table_is_none() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert!(table.most_common().is_none());
    }

    #[test]
    fn len_counts_distinct_tokens() {
        let mut table = FrequencyTable::new();
        table.record(&["go", "go", "fast"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn ranked_orders_by_count_then_word() {
        let mut table = FrequencyTable::new();
        table.record(&["go", "go", "stop", "fast"]);

        let ranked = table.ranked();
        assert_eq!(ranked, vec![("go", 2), ("fast", 1), ("stop", 1)]);
    }
}
