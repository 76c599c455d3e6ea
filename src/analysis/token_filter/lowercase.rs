//! Lowercase filter implementation.
//!
//! Converts all token text to lowercase so that casing never creates
//! distinct vocabulary entries.
//!
//! # Examples
//!
//! ```
//! use doxa::analysis::token::Token;
//! use doxa::analysis::token_filter::Filter;
//! use doxa::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// ASCII text is lowercased in place; other text goes through the
/// Unicode-aware path.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens.map(|mut token| {
            if token.text.is_ascii() {
                token.text.make_ascii_lowercase();
                token
            } else {
                Token {
                    text: token.text.to_lowercase(),
                    ..token
                }
            }
        });

        Ok(Box::new(filtered_tokens))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("The", 0),
            Token::new("QUICK", 1),
            Token::new("Brown", 2),
        ];

        let result: Vec<_> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "the");
        assert_eq!(result[1].text, "quick");
        assert_eq!(result[2].text, "brown");
    }

    #[test]
    fn test_lowercase_filter_non_ascii() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("GRÜSSE", 0)];

        let result: Vec<_> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "grüsse");
    }

    #[test]
    fn test_lowercase_filter_preserves_offsets() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::with_offsets("Hello", 0, 3, 8)];

        let result: Vec<_> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].start_offset, 3);
        assert_eq!(result[0].end_offset, 8);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
