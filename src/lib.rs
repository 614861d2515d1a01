#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

//! Bilingual prompt-tag catalog worker.
//!
//! Ingests heterogeneous tabular sources of English/Chinese descriptive
//! labels ("tags") used for generative-image prompting, normalizes and
//! deduplicates them, classifies each tag against a bilingual keyword
//! taxonomy, derives a popularity weight from merge counts, and emits JSON
//! projections of the resulting catalog (hierarchical, flat/searchable,
//! structural, and curated combinations).
//!
//! The core pipeline ([`pipeline`]) is pure and sequential: it consumes an
//! ordered stream of [`ingest::RawTagRecord`] values and produces a
//! [`pipeline::organize::CategoryTree`]. File reading ([`ingest`]) and JSON
//! writing ([`output`]) are thin adapters around it.

pub mod classification;
pub mod config;
pub mod ingest;
pub mod observability;
pub mod output;
pub mod pipeline;
