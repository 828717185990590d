//! Writing-style profiles for Korean and English text.
//!
//! [`analyze`] turns a batch of documents into a [`StyleProfile`], a
//! statistical fingerprint of sentence shape, vocabulary, openings and
//! closings, transitions, tone, markup and recurring phrases. [`merge()`]
//! folds a newer profile into an older one without re-reading any documents.

pub mod analyzers;
pub mod builder;
pub mod cleaner;
pub mod commands;
pub mod config;
pub mod ingest;
pub mod merge;
pub mod report;
pub mod segmenter;
pub mod store;
pub mod types;

pub use builder::analyze;
pub use merge::merge;
pub use report::{generate_report, style_guide, writing_guidelines, Language};
pub use store::ProfileStore;
pub use types::StyleProfile;
