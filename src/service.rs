//! Lock-guarded service boundary.
//!
//! [`SentimentService`] is the surface a host web layer calls into: the
//! three operations (status / train / predict) with serializable response
//! payloads, a configured artifact path, and an exclusive lock making
//! training mutually exclusive with prediction. Training replaces the fitted
//! state wholesale, so concurrent readers must never observe it mid-swap.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::corpus::Label;
use crate::error::Result;
use crate::pipeline::SentimentPipeline;

/// Response payload for the status operation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether a trained model is available.
    pub trained: bool,
}

/// Response payload for the train operation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TrainResponse {
    /// Held-out accuracy of the freshly trained model.
    pub accuracy: f64,
}

/// Response payload for the predict operation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// The predicted sentiment.
    pub sentiment: Label,
    /// Confidence per class, 0-100.
    pub confidence: BTreeMap<Label, f64>,
}

/// A sentiment pipeline behind a lock, bound to an artifact path.
#[derive(Debug)]
pub struct SentimentService {
    pipeline: RwLock<SentimentPipeline>,
    artifact_path: PathBuf,
}

impl SentimentService {
    /// Open a service, loading the artifact at `artifact_path` if one exists.
    ///
    /// A missing artifact yields a fresh untrained service; an unreadable or
    /// malformed artifact is an error, and the caller decides whether to fall
    /// back to [`SentimentService::untrained`].
    pub fn open<P: Into<PathBuf>>(artifact_path: P) -> Result<Self> {
        let artifact_path = artifact_path.into();
        let mut pipeline = SentimentPipeline::new()?;
        if artifact_path.exists() {
            pipeline.load(&artifact_path)?;
        }
        Ok(SentimentService {
            pipeline: RwLock::new(pipeline),
            artifact_path,
        })
    }

    /// Create a service that starts untrained regardless of what is on disk.
    pub fn untrained<P: Into<PathBuf>>(artifact_path: P) -> Result<Self> {
        Ok(SentimentService {
            pipeline: RwLock::new(SentimentPipeline::new()?),
            artifact_path: artifact_path.into(),
        })
    }

    /// Report whether a trained model is available.
    pub fn status(&self) -> StatusResponse {
        StatusResponse {
            trained: self.pipeline.read().is_trained(),
        }
    }

    /// Train on the sample corpus and persist the artifact.
    pub fn train(&self) -> Result<TrainResponse> {
        let mut pipeline = self.pipeline.write();
        let accuracy = pipeline.train()?;
        pipeline.save(&self.artifact_path)?;
        Ok(TrainResponse { accuracy })
    }

    /// Classify a review with the current model.
    pub fn predict(&self, review: &str) -> Result<PredictResponse> {
        let prediction = self.pipeline.read().predict(review)?;
        Ok(PredictResponse {
            sentiment: prediction.sentiment,
            confidence: prediction.confidence,
        })
    }

    /// The artifact path this service persists to.
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerdictError;

    #[test]
    fn test_fresh_service_is_untrained() {
        let dir = tempfile::tempdir().unwrap();
        let service = SentimentService::open(dir.path().join("model.bin")).unwrap();

        assert!(!service.status().trained);
        let err = service.predict("fine movie").unwrap_err();
        assert!(matches!(err, VerdictError::NotTrained));
    }

    #[test]
    fn test_open_rejects_malformed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        std::fs::write(&path, b"definitely not an artifact").unwrap();

        assert!(SentimentService::open(&path).is_err());
        // The host can still come up untrained.
        assert!(SentimentService::untrained(&path).is_ok());
    }
}
