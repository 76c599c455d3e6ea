//! # Doxa
//!
//! A supervised naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Word-level training from labeled example sentences
//! - Two-pass probability derivation over the word x category cross product
//! - Multiplicative Bayes-combination scoring with a fixed [0.01, 0.99]
//!   probability clamp
//! - Pluggable text analysis pipeline (tokenizers and token filters)
//!
//! ## Quick start
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
//! assert_eq!(classifier.classify("feeling happy")?.as_deref(), Some("happy"));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
