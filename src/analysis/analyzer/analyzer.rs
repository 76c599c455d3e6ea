//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer with filters to transform raw text into the
//! token stream the classifier consumes:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Classifier
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across thread
/// boundaries behind an `Arc`.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This performs the complete analysis pipeline, including tokenization
    /// and all configured filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
