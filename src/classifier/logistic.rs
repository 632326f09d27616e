//! Binary logistic regression.
//!
//! An L2-regularized logistic regression trained with batch gradient descent.
//! Training is fully deterministic: weights start at zero and the data order
//! is whatever the caller passes, so there is no stochastic component to
//! seed. The iteration cap is a safety valve, not a tuning parameter; the
//! descent normally stops on the gradient tolerance first.

use serde::{Deserialize, Serialize};

use crate::corpus::Label;
use crate::error::{Result, VerdictError};

/// Training parameters for [`LogisticRegression::fit`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrainParams {
    /// L2 regularization strength.
    pub l2: f64,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Hard cap on descent iterations.
    pub max_iterations: usize,
    /// Convergence threshold on the largest gradient component.
    pub tolerance: f64,
}

impl Default for TrainParams {
    fn default() -> Self {
        TrainParams {
            l2: 1.0,
            learning_rate: 1.0,
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// A fitted binary logistic regression model.
///
/// Class order is fixed: index 0 is [`Label::Negative`], index 1 is
/// [`Label::Positive`], and the sigmoid output is the probability of the
/// positive class.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Feature coefficients.
    weights: Vec<f64>,
    /// Bias term.
    bias: f64,
    /// The two classes, in canonical order.
    classes: [Label; 2],
}

impl LogisticRegression {
    /// Fit a model on feature rows `x` and labels `y`.
    ///
    /// Requires a non-empty, shape-consistent matrix and both classes
    /// present in `y`.
    pub fn fit(x: &[Vec<f64>], y: &[Label], params: TrainParams) -> Result<Self> {
        if x.is_empty() || y.is_empty() {
            return Err(VerdictError::training("training set is empty"));
        }
        if x.len() != y.len() {
            return Err(VerdictError::training(format!(
                "feature rows ({}) and labels ({}) differ in length",
                x.len(),
                y.len()
            )));
        }
        let dimensions = x[0].len();
        if dimensions == 0 {
            return Err(VerdictError::training("feature rows have zero dimensions"));
        }
        if let Some(row) = x.iter().find(|row| row.len() != dimensions) {
            return Err(VerdictError::training(format!(
                "inconsistent feature row length: expected {dimensions}, found {}",
                row.len()
            )));
        }
        if !y.contains(&Label::Positive) || !y.contains(&Label::Negative) {
            return Err(VerdictError::training(
                "training labels must contain both classes",
            ));
        }

        let n = x.len() as f64;
        let targets: Vec<f64> = y
            .iter()
            .map(|label| match label {
                Label::Positive => 1.0,
                Label::Negative => 0.0,
            })
            .collect();

        let mut weights = vec![0.0; dimensions];
        let mut bias = 0.0;
        let mut gradient = vec![0.0; dimensions];

        for _ in 0..params.max_iterations {
            gradient.iter_mut().for_each(|g| *g = 0.0);
            let mut bias_gradient = 0.0;

            for (row, &target) in x.iter().zip(targets.iter()) {
                let error = Self::sigmoid(Self::dot(&weights, row) + bias) - target;
                for (g, &value) in gradient.iter_mut().zip(row.iter()) {
                    *g += error * value;
                }
                bias_gradient += error;
            }

            // Average the data gradient; the bias is not regularized.
            let mut max_component: f64 = 0.0;
            for (g, &w) in gradient.iter_mut().zip(weights.iter()) {
                *g = *g / n + params.l2 * w / n;
                max_component = max_component.max(g.abs());
            }
            bias_gradient /= n;
            max_component = max_component.max(bias_gradient.abs());

            for (w, &g) in weights.iter_mut().zip(gradient.iter()) {
                *w -= params.learning_rate * g;
            }
            bias -= params.learning_rate * bias_gradient;

            if max_component < params.tolerance {
                break;
            }
        }

        if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return Err(VerdictError::training(
                "training diverged to non-finite coefficients",
            ));
        }

        Ok(LogisticRegression {
            weights,
            bias,
            classes: Label::ALL,
        })
    }

    /// Predict the label for a single feature row.
    pub fn predict(&self, x: &[f64]) -> Label {
        if self.positive_probability(x) >= 0.5 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// Per-class probabilities for a single feature row, indexed by
    /// [`Self::classes`]. The two values sum to 1.
    pub fn predict_probabilities(&self, x: &[f64]) -> [f64; 2] {
        let positive = self.positive_probability(x);
        [1.0 - positive, positive]
    }

    /// The two classes, in the order `predict_probabilities` reports them.
    pub fn classes(&self) -> [Label; 2] {
        self.classes
    }

    /// Number of features this model was fitted on.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn positive_probability(&self, x: &[f64]) -> f64 {
        Self::sigmoid(Self::dot(&self.weights, x) + self.bias)
    }

    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }

    fn dot(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
    }
}
