//! Supervised naive Bayes classifier over word/category counters.
//!
//! The classifier works in three strictly ordered phases:
//!
//! 1. [`train`](BayesClassifier::train) accumulates per-word and
//!    per-category counters from labeled sentences.
//! 2. [`probabilities`](BayesClassifier::probabilities) derives, in two
//!    passes over the full word x category cross product, a clamped
//!    conditional probability per pairing.
//! 3. [`guess`](BayesClassifier::guess) multiplies those probabilities over
//!    the known words of an input sentence and normalizes the per-category
//!    products into a distribution.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::{DoxaError, Result};

use super::types::{CategoryScore, CategoryStat, TrainingSample, WordEntry};

/// Lower bound for a derived word-category probability.
pub const PROBABILITY_FLOOR: f64 = 0.01;

/// Upper bound for a derived word-category probability.
pub const PROBABILITY_CEILING: f64 = 0.99;

/// A supervised naive Bayes text classifier.
///
/// Each instance exclusively owns its vocabulary and category tables; there
/// is no shared or static state. All operations are synchronous, in-memory
/// computations.
pub struct BayesClassifier {
    /// Analyzer for tokenization, shared by training and guessing.
    analyzer: Arc<dyn Analyzer>,
    /// Vocabulary: word -> per-category stats.
    words: AHashMap<String, WordEntry>,
    /// Category name -> training counters.
    categories: AHashMap<String, CategoryStat>,
    /// Distinct words in first-seen order; drives derivation iteration.
    word_list: Vec<String>,
    /// Distinct categories in first-seen order; drives scoring iteration.
    category_list: Vec<String>,
    /// Whether derived probabilities are current with the counters.
    ready: bool,
}

impl BayesClassifier {
    /// Create a new classifier with the standard analyzer (word-character
    /// tokenization plus lowercasing).
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(StandardAnalyzer::new()?)))
    }

    /// Create a new classifier with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        BayesClassifier {
            analyzer,
            words: AHashMap::new(),
            categories: AHashMap::new(),
            word_list: Vec::new(),
            category_list: Vec::new(),
            ready: false,
        }
    }

    /// Ingest one labeled training sentence.
    ///
    /// The category record is created on first sighting (`doc_count = 1`)
    /// and incremented on every later call naming it. Every valid token of
    /// `text` increments the category's `word_occurrences` and the token's
    /// per-category `seen` counter. A sentence with no valid tokens is a
    /// no-op beyond the category bookkeeping.
    ///
    /// Training after [`probabilities`](Self::probabilities) marks the
    /// derived values stale; [`guess`](Self::guess) refuses to score until
    /// the probabilities are derived again.
    pub fn train(&mut self, text: &str, category: &str) -> Result<()> {
        let tokens = self.tokenize(text)?;

        match self.categories.entry(category.to_string()) {
            Entry::Occupied(entry) => {
                let stat = entry.into_mut();
                stat.doc_count += 1;
                stat.word_occurrences += tokens.len() as u64;
            }
            Entry::Vacant(entry) => {
                entry.insert(CategoryStat {
                    doc_count: 1,
                    word_occurrences: tokens.len() as u64,
                });
                self.category_list.push(category.to_string());
            }
        }

        for token in tokens {
            match self.words.entry(token) {
                Entry::Occupied(entry) => entry.into_mut().record(category),
                Entry::Vacant(entry) => {
                    self.word_list.push(entry.key().clone());
                    entry.insert(WordEntry::default()).record(category);
                }
            }
        }

        self.ready = false;
        Ok(())
    }

    /// Ingest a batch of labeled training samples.
    pub fn train_samples(&mut self, samples: &[TrainingSample]) -> Result<()> {
        for sample in samples {
            self.train(&sample.text, &sample.category)?;
        }
        Ok(())
    }

    /// Derive per-(word, category) probabilities from the accumulated
    /// counters.
    ///
    /// Must run after all training and before any guess. Both passes always
    /// run together, over the full word x category cross product, so every
    /// word ends up with a stat for every known category. Re-running with no
    /// intervening training reproduces identical values; re-running after
    /// further training recomputes consistently from the counters.
    pub fn probabilities(&mut self) -> Result<()> {
        self.derive_frequencies();
        self.derive_probabilities();
        self.ready = true;
        Ok(())
    }

    /// Pass 1: cross-complete the stat matrix and compute, per pairing, the
    /// share of the category's training sentences containing the word.
    fn derive_frequencies(&mut self) {
        for word in &self.word_list {
            let Some(entry) = self.words.get_mut(word) else {
                continue;
            };
            for category in &self.category_list {
                let doc_count = self
                    .categories
                    .get(category)
                    .map(|stat| stat.doc_count)
                    .unwrap_or(0);
                let stat = entry.ensure(category);
                stat.frequency = Some(if doc_count == 0 {
                    0.0
                } else {
                    stat.seen as f64 / doc_count as f64
                });
            }
        }
    }

    /// Pass 2: normalize each word's frequency across all categories and
    /// clamp the result into the allowed probability band.
    fn derive_probabilities(&mut self) {
        for word in &self.word_list {
            let Some(entry) = self.words.get_mut(word) else {
                continue;
            };
            let total_frequency: f64 = self
                .category_list
                .iter()
                .filter_map(|category| entry.stat(category).and_then(|stat| stat.frequency))
                .sum();
            for category in &self.category_list {
                let stat = entry.ensure(category);
                let frequency = stat.frequency.unwrap_or(0.0);
                // total_frequency is positive for any word actually seen in
                // training; the zero guard keeps the degenerate case finite.
                let raw = if total_frequency > 0.0 {
                    frequency / total_frequency
                } else {
                    0.0
                };
                stat.probability = Some(raw.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING));
            }
        }
    }

    /// Score `text` against every known category.
    ///
    /// Returns a mapping from category name to normalized probability; the
    /// values sum to 1 across categories. Tokens absent from the vocabulary
    /// contribute no evidence. An input with zero known tokens yields the
    /// uniform distribution. With no categories trained the mapping is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`DoxaError::InvalidOperation`] if
    /// [`probabilities`](Self::probabilities) has never run or training has
    /// made the derived values stale.
    pub fn guess(&self, text: &str) -> Result<HashMap<String, CategoryScore>> {
        if !self.ready {
            return Err(DoxaError::invalid_operation(
                "probabilities() must run after training and before guessing",
            ));
        }

        let tokens = self.tokenize(text)?;
        let evidence: Vec<&WordEntry> = tokens
            .iter()
            .filter_map(|token| self.words.get(token))
            .collect();

        // Multiply the per-word probabilities per category; a repeated word
        // contributes its factor once per occurrence.
        let mut products = Vec::with_capacity(self.category_list.len());
        let mut sum = 0.0;
        for category in &self.category_list {
            let mut product = 1.0;
            for entry in &evidence {
                let probability = entry
                    .stat(category)
                    .and_then(|stat| stat.probability)
                    .ok_or_else(|| {
                        DoxaError::invalid_operation(
                            "word-category probability has not been derived",
                        )
                    })?;
                product *= probability;
            }
            sum += product;
            products.push(product);
        }

        let mut scores = HashMap::with_capacity(self.category_list.len());
        if self.category_list.is_empty() {
            return Ok(scores);
        }

        let uniform = 1.0 / self.category_list.len() as f64;
        for (category, product) in self.category_list.iter().zip(products) {
            let probability = if sum.is_finite() && sum > 0.0 {
                product / sum
            } else {
                // Every product underflowed to zero; report a flat
                // distribution rather than dividing.
                uniform
            };
            scores.insert(category.clone(), CategoryScore { probability });
        }

        Ok(scores)
    }

    /// Guess and return the highest-scoring category name.
    ///
    /// Ties resolve to the earliest-trained category. Returns `None` when no
    /// categories have been trained.
    pub fn classify(&self, text: &str) -> Result<Option<String>> {
        let scores = self.guess(text)?;

        let mut best: Option<(&String, f64)> = None;
        for category in &self.category_list {
            let Some(score) = scores.get(category) else {
                continue;
            };
            match best {
                Some((_, probability)) if probability >= score.probability => {}
                _ => best = Some((category, score.probability)),
            }
        }

        Ok(best.map(|(category, _)| category.clone()))
    }

    /// Distinct vocabulary words, in first-seen order.
    pub fn vocabulary(&self) -> &[String] {
        &self.word_list
    }

    /// Known category names, in first-seen order.
    pub fn category_names(&self) -> &[String] {
        &self.category_list
    }

    /// Training counters for `category`, if it has been seen.
    pub fn category_stat(&self, category: &str) -> Option<&CategoryStat> {
        self.categories.get(category)
    }

    /// Per-category stats for `word`, if it is in the vocabulary.
    pub fn word_entry(&self, word: &str) -> Option<&WordEntry> {
        self.words.get(word)
    }

    /// Whether derived probabilities are current with the counters.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }
}

impl Default for BayesClassifier {
    fn default() -> Self {
        Self::new().expect("Default analyzer should be creatable")
    }
}

impl std::fmt::Debug for BayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesClassifier")
            .field("vocabulary_size", &self.word_list.len())
            .field("categories", &self.category_list.len())
            .field("ready", &self.ready)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
