//! Labels, labeled samples, and the built-in sample corpus.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VerdictError;

pub mod sample;

pub use sample::sample_reviews;

/// Sentiment label for a review.
///
/// The variant order is the crate's canonical class order: negative sorts
/// before positive everywhere classes are enumerated, so confidence maps and
/// classifier outputs are deterministic.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Negative sentiment
    Negative,
    /// Positive sentiment
    Positive,
}

impl Label {
    /// Both labels, in canonical order.
    pub const ALL: [Label; 2] = [Label::Negative, Label::Positive];

    /// The canonical string form ("negative" / "positive").
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Negative => "negative",
            Label::Positive => "positive",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = VerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "negative" => Ok(Label::Negative),
            "positive" => Ok(Label::Positive),
            other => Err(VerdictError::invalid_input(format!(
                "unknown label: {other}"
            ))),
        }
    }
}

/// A raw review with its sentiment label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSample {
    /// The raw review text
    pub review: String,
    /// The sentiment label
    pub label: Label,
}

impl LabeledSample {
    /// Create a new labeled sample.
    pub fn new<S: Into<String>>(review: S, label: Label) -> Self {
        LabeledSample {
            review: review.into(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ordering() {
        assert!(Label::Negative < Label::Positive);
        assert_eq!(Label::ALL, [Label::Negative, Label::Positive]);
    }

    #[test]
    fn test_label_display_and_parse() {
        assert_eq!(Label::Positive.to_string(), "positive");
        assert_eq!(Label::Negative.to_string(), "negative");
        assert_eq!("positive".parse::<Label>().unwrap(), Label::Positive);
        assert!("neutral".parse::<Label>().is_err());
    }

    #[test]
    fn test_label_serde_lowercase() {
        let json = serde_json::to_string(&Label::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
        let label: Label = serde_json::from_str("\"positive\"").unwrap();
        assert_eq!(label, Label::Positive);
    }
}
