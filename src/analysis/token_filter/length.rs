//! Length filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens shorter than a minimum character count.
///
/// The review normalizer drops tokens of one or two characters, which are
/// almost always noise left over from contractions and abbreviations.
///
/// # Examples
///
/// ```
/// use verdict::analysis::token::Token;
/// use verdict::analysis::token_filter::Filter;
/// use verdict::analysis::token_filter::length::LengthFilter;
///
/// let filter = LengthFilter::new(3);
/// let tokens = vec![Token::new("ok", 0), Token::new("good", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "good");
/// ```
#[derive(Clone, Debug)]
pub struct LengthFilter {
    /// Minimum token length in characters (inclusive)
    min_length: usize,
}

impl LengthFilter {
    /// Create a new length filter keeping tokens of at least `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        LengthFilter { min_length }
    }

    /// Get the minimum length enforced by this filter.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || token.text.chars().count() >= min_length)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::new(3);
        let tokens = vec![
            Token::new("a", 0),
            Token::new("an", 1),
            Token::new("ant", 2),
            Token::new("movie", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "ant");
        assert_eq!(result[1].text, "movie");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::new(3).name(), "length");
    }
}
