//! Supervised naive Bayes text classification.
//!
//! Training accumulates per-word and per-category counters from labeled
//! sentences, a one-shot derivation step turns the counters into clamped
//! per-(word, category) probabilities, and guessing scores arbitrary text
//! against every known category by multiplying the probabilities of its
//! known words.
//!
//! The three phases are strictly ordered: all training, then
//! [`BayesClassifier::probabilities`], then any number of guesses. Guessing
//! before the derivation step (or after training has made it stale) is an
//! error.
//!
//! # Example
//!
//! ```
//! use doxa::classifier::BayesClassifier;
//!
//! # fn main() -> doxa::error::Result<()> {
//! let mut classifier = BayesClassifier::new()?;
//! classifier.train("I am happy", "happy")?;
//! classifier.train("I am sad", "sad")?;
//! classifier.probabilities()?;
//!
//! let scores = classifier.guess("happy today")?;
//! assert!(scores["happy"].probability > scores["sad"].probability);
//! # Ok(())
//! # }
//! ```

mod bayes;
mod types;

// Public exports
pub use bayes::{BayesClassifier, PROBABILITY_CEILING, PROBABILITY_FLOOR};
pub use types::{CategoryScore, CategoryStat, TrainingSample, WordCategoryStat, WordEntry};

use std::path::Path;

use crate::error::Result;

/// Load training samples from a JSON file.
///
/// The file holds an array of objects with `text` and `category` fields.
pub fn load_training_samples<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<TrainingSample> = serde_json::from_str(&content)?;
    Ok(samples)
}
