//! Sentiment pipeline controller.
//!
//! [`SentimentPipeline`] orchestrates the full flow: normalization, feature
//! extraction, model fitting, inference, and artifact persistence. The
//! pipeline is either untrained (no fitted state) or trained (a fitted
//! vectorizer/classifier pair); the pair is held in a single `Option`, so it
//! can never be partially set.
//!
//! # Examples
//!
//! ```no_run
//! use verdict::pipeline::SentimentPipeline;
//!
//! # fn main() -> verdict::error::Result<()> {
//! let mut pipeline = SentimentPipeline::new()?;
//! let accuracy = pipeline.train()?;
//! println!("held-out accuracy: {accuracy:.2}");
//!
//! let prediction = pipeline.predict("This movie is fantastic!")?;
//! println!("{}", prediction.sentiment);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::ReviewAnalyzer;
use crate::artifact::ModelArtifact;
use crate::classifier::{LogisticRegression, TrainParams, accuracy, stratified_split};
use crate::corpus::{Label, LabeledSample, sample_reviews};
use crate::error::{Result, VerdictError};
use crate::features::TfIdfVectorizer;

/// Fraction of samples held out for the accuracy measurement.
const TEST_FRACTION: f64 = 0.2;

/// Seed for the stratified train/test split.
const SPLIT_SEED: u64 = 42;

/// Placeholder token substituted when a review cleans down to nothing, so
/// the feature vector stays well-defined.
const EMPTY_PLACEHOLDER: &str = "empty";

/// A classification result: the predicted label and per-class confidence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prediction {
    /// The predicted sentiment.
    pub sentiment: Label,
    /// Confidence per class, scaled to 0-100. Exactly two entries, iterated
    /// in canonical label order; they sum to 100.
    pub confidence: BTreeMap<Label, f64>,
}

/// The fitted state: feature space and classifier, both present or neither.
#[derive(Debug)]
struct FittedModel {
    vectorizer: TfIdfVectorizer,
    classifier: LogisticRegression,
}

/// The sentiment classification pipeline.
#[derive(Debug)]
pub struct SentimentPipeline {
    analyzer: ReviewAnalyzer,
    fitted: Option<FittedModel>,
}

impl SentimentPipeline {
    /// Create a new, untrained pipeline.
    pub fn new() -> Result<Self> {
        Ok(SentimentPipeline {
            analyzer: ReviewAnalyzer::new()?,
            fitted: None,
        })
    }

    /// Train on the built-in sample corpus and return held-out accuracy.
    pub fn train(&mut self) -> Result<f64> {
        let samples = sample_reviews();
        self.train_on(&samples)
    }

    /// Train on caller-supplied samples and return held-out accuracy.
    ///
    /// Always fits a fresh vectorizer/classifier pair; on failure the
    /// pipeline is left untrained.
    pub fn train_on(&mut self, samples: &[LabeledSample]) -> Result<f64> {
        self.fitted = None;

        let mut cleaned = Vec::with_capacity(samples.len());
        let mut labels = Vec::with_capacity(samples.len());
        for sample in samples {
            let text = self.analyzer.normalize(&sample.review)?;
            if !text.is_empty() {
                cleaned.push(text);
                labels.push(sample.label);
            }
        }
        if cleaned.is_empty() {
            return Err(VerdictError::training(
                "training corpus is empty after cleaning",
            ));
        }

        let vectorizer = TfIdfVectorizer::fit(&cleaned)?;
        let (train_indices, test_indices) =
            stratified_split(&labels, TEST_FRACTION, SPLIT_SEED)?;

        let train_x: Vec<Vec<f64>> = train_indices
            .iter()
            .map(|&i| vectorizer.transform(&cleaned[i]))
            .collect();
        let train_y: Vec<Label> = train_indices.iter().map(|&i| labels[i]).collect();
        let classifier = LogisticRegression::fit(&train_x, &train_y, TrainParams::default())?;

        let predicted: Vec<Label> = test_indices
            .iter()
            .map(|&i| classifier.predict(&vectorizer.transform(&cleaned[i])))
            .collect();
        let actual: Vec<Label> = test_indices.iter().map(|&i| labels[i]).collect();
        let held_out_accuracy = accuracy(&predicted, &actual);

        self.fitted = Some(FittedModel {
            vectorizer,
            classifier,
        });
        Ok(held_out_accuracy)
    }

    /// Classify a review.
    ///
    /// Blank input is rejected before the model is consulted; calling on an
    /// untrained pipeline is a [`VerdictError::NotTrained`] error.
    pub fn predict(&self, review: &str) -> Result<Prediction> {
        if review.trim().is_empty() {
            return Err(VerdictError::invalid_input("review text is empty"));
        }
        let fitted = self.fitted.as_ref().ok_or(VerdictError::NotTrained)?;

        let mut cleaned = self.analyzer.normalize(review)?;
        if cleaned.is_empty() {
            cleaned = EMPTY_PLACEHOLDER.to_string();
        }

        let features = fitted.vectorizer.transform(&cleaned);
        let sentiment = fitted.classifier.predict(&features);
        let probabilities = fitted.classifier.predict_probabilities(&features);

        let confidence = fitted
            .classifier
            .classes()
            .iter()
            .zip(probabilities.iter())
            .map(|(&label, &p)| (label, p * 100.0))
            .collect();

        Ok(Prediction {
            sentiment,
            confidence,
        })
    }

    /// Check whether the pipeline holds a fitted model.
    pub fn is_trained(&self) -> bool {
        self.fitted.is_some()
    }

    /// Persist the fitted model to `path`.
    ///
    /// There is nothing to persist before training, so calling on an
    /// untrained pipeline is a [`VerdictError::NotTrained`] error.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let fitted = self.fitted.as_ref().ok_or(VerdictError::NotTrained)?;
        let artifact = ModelArtifact {
            vectorizer: fitted.vectorizer.clone(),
            classifier: fitted.classifier.clone(),
        };
        artifact.save(path)
    }

    /// Load a fitted model from `path`, replacing any current state.
    ///
    /// On failure the existing state is left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let artifact = ModelArtifact::load(path)?;
        self.fitted = Some(FittedModel {
            vectorizer: artifact.vectorizer,
            classifier: artifact.classifier,
        });
        Ok(())
    }
}
