//! # Verdict
//!
//! Sentiment classification for short movie reviews.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Text normalization pipeline (HTML stripping, stop words, lemmatization)
//! - TF-IDF features over unigrams and bigrams
//! - L2-regularized logistic regression with held-out accuracy reporting
//! - Versioned, checksummed model artifacts

pub mod analysis;
pub mod artifact;
pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod service;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
