//! Regex replacement char filter.

use regex::Regex;

use super::CharFilter;
use crate::error::{Result, VerdictError};

/// A char filter that replaces every match of a regex pattern.
///
/// The review normalizer uses this filter to remove URL-like runs,
/// punctuation, and digits before tokenization.
///
/// # Examples
///
/// ```
/// use verdict::analysis::char_filter::CharFilter;
/// use verdict::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
///
/// let filter = PatternReplaceCharFilter::new(r"[0-9]+", "").unwrap();
/// assert_eq!(filter.filter("rated 10 out of 10"), "rated  out of ");
/// ```
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| VerdictError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, self.replacement.as_str()).into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

impl std::fmt::Debug for PatternReplaceCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternReplaceCharFilter")
            .field("pattern", &self.pattern.as_str())
            .field("replacement", &self.replacement)
            .finish()
    }
}
