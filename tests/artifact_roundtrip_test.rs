use std::fs;

use verdict::error::{Result, VerdictError};
use verdict::pipeline::SentimentPipeline;
use verdict::service::SentimentService;

const SAMPLE_REVIEWS: &[&str] = &[
    "This movie is fantastic! Great acting.",
    "Terrible, boring, awful waste of time.",
    "An ordinary film about ordinary people.",
    "Absolutely wonderful! Highly recommended.",
    "Poor quality and ridiculous story.",
];

#[test]
fn test_save_load_reproduces_predictions() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.bin");

    // 1. Train and persist.
    let mut trained = SentimentPipeline::new()?;
    trained.train()?;
    trained.save(&path)?;

    // 2. Load into a fresh pipeline.
    let mut restored = SentimentPipeline::new()?;
    assert!(!restored.is_trained());
    restored.load(&path)?;
    assert!(restored.is_trained());

    // 3. Both pipelines must agree exactly on every sample review.
    for review in SAMPLE_REVIEWS {
        let a = trained.predict(review)?;
        let b = restored.predict(review)?;
        assert_eq!(a.sentiment, b.sentiment, "sentiment diverged for {review:?}");
        assert_eq!(a.confidence, b.confidence, "confidence diverged for {review:?}");
    }
    Ok(())
}

#[test]
fn test_save_overwrites_previous_artifact() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.bin");

    let mut pipeline = SentimentPipeline::new()?;
    pipeline.train()?;
    pipeline.save(&path)?;
    let first = fs::metadata(&path)?.len();

    pipeline.train()?;
    pipeline.save(&path)?;
    let second = fs::metadata(&path)?.len();

    // Same corpus, same seeds: the rewritten artifact is byte-compatible in size
    // and still loads.
    assert_eq!(first, second);
    let mut restored = SentimentPipeline::new()?;
    restored.load(&path)?;
    assert!(restored.is_trained());
    Ok(())
}

#[test]
fn test_load_missing_file_fails_and_leaves_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut pipeline = SentimentPipeline::new().unwrap();

    let err = pipeline.load(dir.path().join("absent.bin")).unwrap_err();
    assert!(matches!(err, VerdictError::Io(_)));
    assert!(!pipeline.is_trained());
}

#[test]
fn test_load_garbage_fails_and_leaves_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.bin");
    fs::write(&path, b"this is not a model artifact at all").unwrap();

    let mut pipeline = SentimentPipeline::new().unwrap();
    let err = pipeline.load(&path).unwrap_err();
    assert!(matches!(err, VerdictError::Artifact(_)));
    assert!(!pipeline.is_trained());
}

#[test]
fn test_load_truncated_artifact_fails() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.bin");

    let mut pipeline = SentimentPipeline::new()?;
    pipeline.train()?;
    pipeline.save(&path)?;

    let bytes = fs::read(&path)?;
    fs::write(&path, &bytes[..bytes.len() / 2])?;

    let mut restored = SentimentPipeline::new()?;
    assert!(restored.load(&path).is_err());
    assert!(!restored.is_trained());
    Ok(())
}

#[test]
fn test_service_reopens_persisted_model() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.bin");

    // First process: train and persist through the service.
    {
        let service = SentimentService::open(&path)?;
        service.train()?;
    }

    // Second process: the artifact is picked up at startup.
    let service = SentimentService::open(&path)?;
    assert!(service.status().trained);

    let response = service.predict("Amazing experience. The best movie of the year!")?;
    assert_eq!(response.sentiment.to_string(), "positive");
    Ok(())
}
