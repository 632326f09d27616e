//! Feature extraction for cleaned review text.

pub mod tfidf;

pub use tfidf::{TfIdfParams, TfIdfVectorizer};
