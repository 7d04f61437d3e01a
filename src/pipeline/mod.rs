//! # Description Processing Pipeline
//!
//! This module contains the core description-to-structured-data pipeline:
//! lexical object detection, density computation, summary assembly, and the
//! JSON-constrained summarization pass.

pub mod density;
pub mod extract;
pub mod lexicon;
pub mod summarize;
pub mod summary;

// Re-export commonly used types for convenience
pub use density::density;
pub use extract::ObjectExtractor;
pub use lexicon::ObjectLexicon;
pub use summarize::JsonSummarizer;
pub use summary::{SummaryBuilder, SummaryRecord};
