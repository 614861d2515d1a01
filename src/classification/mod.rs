//! Keyword-based tag classification: the taxonomy data and the classifier
//! compiled from it.

pub mod classifier;
pub mod taxonomy;

pub use classifier::{Classifier, builtin_classifier};
pub use taxonomy::Taxonomy;
