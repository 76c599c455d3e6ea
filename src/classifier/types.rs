//! Common types for the Bayes classifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A labeled training example: one sentence and the category it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Example text.
    pub text: String,
    /// Category label.
    pub category: String,
}

/// Per-category counters accumulated during training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    /// Number of training sentences labeled with this category.
    pub doc_count: u64,
    /// Total valid tokens seen across all of this category's sentences.
    pub word_occurrences: u64,
}

/// Counters and derived values for one (word, category) pairing.
///
/// `seen` accumulates during training; `frequency` and `probability` stay
/// `None` until the corresponding derivation pass of
/// [`BayesClassifier::probabilities`](super::BayesClassifier::probabilities)
/// has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WordCategoryStat {
    /// Token occurrences in training sentences of this category.
    pub seen: u64,
    /// Share of the category's training sentences in which the word
    /// appeared, `seen / doc_count`.
    pub frequency: Option<f64>,
    /// The word's frequency in this category relative to its frequency
    /// summed over all categories, clamped to [0.01, 0.99].
    pub probability: Option<f64>,
}

/// Per-category statistics for one vocabulary word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordEntry {
    stats: HashMap<String, WordCategoryStat>,
}

impl WordEntry {
    /// Record one sighting of this word in a sentence of `category`.
    pub(crate) fn record(&mut self, category: &str) {
        self.stats.entry(category.to_string()).or_default().seen += 1;
    }

    /// Get the stat for `category`, creating a zeroed one if absent.
    pub(crate) fn ensure(&mut self, category: &str) -> &mut WordCategoryStat {
        self.stats.entry(category.to_string()).or_default()
    }

    /// Get the stat for `category`, if any.
    pub fn stat(&self, category: &str) -> Option<&WordCategoryStat> {
        self.stats.get(category)
    }

    /// Iterate over all per-category stats for this word.
    pub fn stats(&self) -> impl Iterator<Item = (&str, &WordCategoryStat)> {
        self.stats.iter().map(|(category, stat)| (category.as_str(), stat))
    }

    /// Number of categories this word has a stat for.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Check if this word has no per-category stats yet.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// One entry of the guess output: a category's normalized probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Normalized probability that the input belongs to this category.
    pub probability: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_entry_record() {
        let mut entry = WordEntry::default();
        entry.record("happy");
        entry.record("happy");
        entry.record("sad");

        assert_eq!(entry.len(), 2);
        assert_eq!(entry.stat("happy").unwrap().seen, 2);
        assert_eq!(entry.stat("sad").unwrap().seen, 1);
        assert_eq!(entry.stat("angry"), None);
    }

    #[test]
    fn test_word_entry_ensure() {
        let mut entry = WordEntry::default();
        entry.record("happy");

        let stat = entry.ensure("sad");
        assert_eq!(stat.seen, 0);
        assert_eq!(stat.frequency, None);
        assert_eq!(stat.probability, None);

        // A second ensure must not reset existing counters
        entry.ensure("happy");
        assert_eq!(entry.stat("happy").unwrap().seen, 1);
    }

    #[test]
    fn test_training_sample_json() {
        let json = r#"{"text": "I am happy", "category": "happy"}"#;
        let sample: TrainingSample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.text, "I am happy");
        assert_eq!(sample.category, "happy");
    }
}
