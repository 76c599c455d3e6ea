//! Text analysis module for Doxa.
//!
//! This module provides the tokenization pipeline that feeds the classifier:
//! tokenizers split raw text into tokens, filters transform them, and
//! analyzers tie both together.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
