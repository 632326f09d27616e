//! Built-in sample training corpus.
//!
//! A stand-in data source: ten hand-written template reviews replicated into
//! a balanced corpus and shuffled with a fixed seed, so every training run
//! over the defaults sees the same data in the same order. Callers with real
//! data pass their own samples through the same shape.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{Label, LabeledSample};

/// Positive template reviews.
const POSITIVE_TEMPLATES: &[&str] = &[
    "This movie is fantastic! Great acting and amazing story.",
    "I loved it! One of the best films I've ever seen.",
    "Brilliant performances and excellent direction.",
    "Absolutely wonderful! Highly recommended.",
    "Amazing experience. The best movie of the year!",
];

/// Negative template reviews.
const NEGATIVE_TEMPLATES: &[&str] = &[
    "Terrible movie. Complete waste of time.",
    "Awful acting and boring plot. Very disappointed.",
    "One of the worst films ever. Don't watch this.",
    "Poor quality and ridiculous story.",
    "Horrible experience. I want my money back.",
];

/// How many times each template is replicated.
const REPLICATION: usize = 100;

/// Shuffle seed, fixed for reproducibility.
const SHUFFLE_SEED: u64 = 42;

/// Generate the sample corpus: each template replicated 100 times
/// (1000 rows, 500 per class), shuffled with a fixed seed.
pub fn sample_reviews() -> Vec<LabeledSample> {
    let mut samples = Vec::with_capacity(
        (POSITIVE_TEMPLATES.len() + NEGATIVE_TEMPLATES.len()) * REPLICATION,
    );

    for _ in 0..REPLICATION {
        for &review in POSITIVE_TEMPLATES {
            samples.push(LabeledSample::new(review, Label::Positive));
        }
    }
    for _ in 0..REPLICATION {
        for &review in NEGATIVE_TEMPLATES {
            samples.push(LabeledSample::new(review, Label::Negative));
        }
    }

    let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
    samples.shuffle(&mut rng);
    samples
}
