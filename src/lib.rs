//! # Object Density Library
//!
//! Derives a structured "object density" summary from a free-text image
//! description produced by a vision-language model: lexical object
//! detection, a density metric (the Object Density Descriptor, ODD), and
//! a second model pass that re-expresses the summary as strict JSON.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//! - `pipeline`: The core stages — lexicon, extraction, density, summary
//!   assembly, and JSON summarization
//! - `model`: Capability seams for the external model services (image
//!   description and JSON-constrained completion) plus HTTP
//!   implementations
//! - `config`: Configuration management and validation
//! - `session`: High-level orchestration of the full flow
//! - `error`: Typed errors for the model capability layer
//!
//! ## Pipeline
//!
//! description text → object extraction → density calculation → summary
//! record → JSON summarization → final outcome. Each stage completes
//! before the next begins; the only blocking operations are the model
//! requests, which have no internal cancellation beyond the HTTP
//! client's request timeout.
//!
//! ## Example
//!
//! ```rust,no_run
//! use object_density::config::PipelineConfig;
//! use object_density::model::{HttpCompletion, HttpDescriber};
//! use object_density::session::AnalysisSession;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = PipelineConfig::default();
//! let session = AnalysisSession::builder()
//!     .with_describer(Box::new(HttpDescriber::new(&config.endpoint, &config.model)?))
//!     .with_completion(Box::new(HttpCompletion::new(&config.endpoint, &config.model)?))
//!     .with_config(config)
//!     .build()?;
//!
//! let image = std::fs::read("photo.png")?;
//! let outcome = session.analyze_image(&image).await?;
//! println!("{} objects, ODD {}", outcome.summary.object_count, outcome.summary.odd);
//! # Ok(())
//! # }
//! ```

// Internal module imports
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod session;

/// Re-export error types for convenience
pub use error::ModelError;

/// Re-export the primary entry points
pub use session::{AnalysisOutcome, AnalysisSession, AnalysisSessionBuilder};
