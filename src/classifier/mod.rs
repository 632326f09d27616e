//! Linear classification over extracted features.

pub mod logistic;
pub mod split;

pub use logistic::{LogisticRegression, TrainParams};
pub use split::stratified_split;

use crate::corpus::Label;

/// Fraction of label pairs that agree.
pub fn accuracy(predicted: &[Label], actual: &[Label]) -> f64 {
    if predicted.is_empty() {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();
    correct as f64 / predicted.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        use Label::{Negative, Positive};

        let predicted = [Positive, Negative, Positive, Positive];
        let actual = [Positive, Negative, Negative, Positive];
        assert_eq!(accuracy(&predicted, &actual), 0.75);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }
}
