//! Review text normalizer.
//!
//! [`ReviewAnalyzer`] is the fixed analysis chain the sentiment pipeline
//! feeds every review through, at training time and at inference time:
//!
//! 1. strip HTML markup (visible text only)
//! 2. remove URL-like runs
//! 3. remove ASCII punctuation
//! 4. remove digits
//! 5. tokenize on word characters (collapsing whitespace)
//! 6. lowercase
//! 7. drop stop words and tokens shorter than 3 characters
//! 8. lemmatize
//!
//! [`ReviewAnalyzer::normalize`] joins the surviving token texts with single
//! spaces, which is the cleaned-text form the feature extractor consumes.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::html_strip::HtmlStripCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Minimum surviving token length in characters.
const MIN_TOKEN_LENGTH: usize = 3;

/// The normalization pipeline for review text.
pub struct ReviewAnalyzer {
    inner: PipelineAnalyzer,
}

impl ReviewAnalyzer {
    /// Create a new review analyzer with the standard chain.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(HtmlStripCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"(?i)http\S+", "")?))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"[[:punct:]]+", "")?))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"[0-9]+", "")?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(LengthFilter::new(MIN_TOKEN_LENGTH)))
            .add_filter(Arc::new(LemmaFilter::new()))
            .with_name("review".to_string());

        Ok(Self { inner: analyzer })
    }

    /// Normalize a review into its cleaned-text form.
    ///
    /// Returns the surviving token texts joined with single spaces; the empty
    /// string when the input is empty or nothing survives the chain.
    pub fn normalize(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let tokens: Vec<String> = self.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens.join(" "))
    }
}

impl Analyzer for ReviewAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "review"
    }
}

impl Debug for ReviewAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_review() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        let cleaned = analyzer
            .normalize("This movie is fantastic! Great acting and amazing story.")
            .unwrap();
        assert_eq!(cleaned, "movie fantastic great act amaze story");
    }

    #[test]
    fn test_normalize_strips_html() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        let cleaned = analyzer
            .normalize("<div>Brilliant <b>performances</b></div>")
            .unwrap();
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.contains('>'));
        assert_eq!(cleaned, "brilliant performance");
    }

    #[test]
    fn test_normalize_strips_urls_and_digits() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        let cleaned = analyzer
            .normalize("Watch http://example.com/trailer rated 10/10 stars")
            .unwrap();
        assert_eq!(cleaned, "watch rate star");
    }

    #[test]
    fn test_normalize_empty_and_noise_inputs() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        assert_eq!(analyzer.normalize("").unwrap(), "");
        assert_eq!(analyzer.normalize("!!! 123 ???").unwrap(), "");
        assert_eq!(analyzer.normalize("the is a of").unwrap(), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let analyzer = ReviewAnalyzer::new().unwrap();
        let once = analyzer
            .normalize("Terrible movie. Complete waste of time.")
            .unwrap();
        let twice = analyzer.normalize(&once).unwrap();
        assert_eq!(once, twice);
    }
}
