//! # Analysis Session
//!
//! High-level orchestration of the full describe → extract → summarize
//! flow. A session owns its injected model capabilities and a
//! configuration; the builder wires them together.
//!
//! ## Architecture
//!
//! 1. **Capability traits**: `Describer` and `CompletionProvider` are
//!    injected, never constructed here — model lifecycle (loading,
//!    caching, one instance per process) is the embedder's concern.
//! 2. **AnalysisSession**: runs the stages sequentially; each stage
//!    completes before the next begins.
//! 3. **AnalysisSessionBuilder**: fluent configuration for CLI and
//!    embedder use.
//!
//! The session holds no mutable state. Concurrent `analyze_*` calls share
//! only the read-only lexicon and the providers, so a session behind an
//! `Arc` is safe to use from multiple tasks, though each individual call
//! is strictly sequential inside.

// External crate imports
use anyhow::{Result, anyhow};

// Internal module imports
use crate::config::PipelineConfig;
use crate::model::{CompletionProvider, Describer};
use crate::pipeline::{JsonSummarizer, ObjectExtractor, SummaryBuilder, SummaryRecord};

/// Final artifact of one analysis: everything the presentation layer
/// needs to render.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The description text the summary was derived from.
    pub description: String,
    /// Structured extraction and density result.
    pub summary: SummaryRecord,
    /// The model's JSON re-expression of the summary, or an
    /// `{"error": ...}` record when its reply did not parse.
    pub json_summary: serde_json::Value,
}

/// Orchestrates the description-to-structured-data pipeline.
pub struct AnalysisSession {
    config: PipelineConfig,
    describer: Option<Box<dyn Describer>>,
    completion: Box<dyn CompletionProvider>,
    builder: SummaryBuilder,
    summarizer: JsonSummarizer,
}

impl AnalysisSession {
    /// Start building a session.
    pub fn builder() -> AnalysisSessionBuilder {
        AnalysisSessionBuilder::new()
    }

    /// The configuration this session runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Analyze a ready-made description: extract objects, compute the
    /// density, and request the JSON summary.
    ///
    /// Empty text is a valid zero-match input. A summarization reply
    /// that is not JSON surfaces as an error record in the outcome; a
    /// completion-service failure propagates as an error.
    pub async fn analyze_description(&self, description: &str) -> Result<AnalysisOutcome> {
        let summary = self.builder.build(description, self.config.area);
        let json_summary = self
            .summarizer
            .summarize(&summary, self.completion.as_ref())
            .await?;

        Ok(AnalysisOutcome {
            description: description.to_string(),
            summary,
            json_summary,
        })
    }

    /// Analyze an encoded image: obtain its description first, then run
    /// [`Self::analyze_description`] on the result.
    ///
    /// Whatever text the describer returns is passed through unmodified;
    /// a description with no recognizable objects simply yields an empty
    /// object set. Requires a describer to have been configured.
    pub async fn analyze_image(&self, image: &[u8]) -> Result<AnalysisOutcome> {
        let describer = self
            .describer
            .as_ref()
            .ok_or_else(|| anyhow!("session has no describer configured"))?;
        let description = describer.describe(image).await?;
        self.analyze_description(&description).await
    }
}

/// Fluent builder for [`AnalysisSession`].
pub struct AnalysisSessionBuilder {
    config: PipelineConfig,
    describer: Option<Box<dyn Describer>>,
    completion: Option<Box<dyn CompletionProvider>>,
    extractor: ObjectExtractor,
}

impl AnalysisSessionBuilder {
    /// Create a builder with default configuration and lexicon.
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
            describer: None,
            completion: None,
            extractor: ObjectExtractor::default(),
        }
    }

    /// Use the given configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject the image-description capability. Optional; sessions
    /// without one can still analyze raw description text.
    pub fn with_describer(mut self, describer: Box<dyn Describer>) -> Self {
        self.describer = Some(describer);
        self
    }

    /// Inject the completion capability used for JSON summarization.
    /// Required.
    pub fn with_completion(mut self, completion: Box<dyn CompletionProvider>) -> Self {
        self.completion = Some(completion);
        self
    }

    /// Use a non-default extractor (custom lexicon).
    pub fn with_extractor(mut self, extractor: ObjectExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Validate the configuration and assemble the session.
    pub fn build(self) -> Result<AnalysisSession> {
        self.config.validate().map_err(anyhow::Error::msg)?;
        let completion = self
            .completion
            .ok_or_else(|| anyhow!("session requires a completion provider"))?;

        Ok(AnalysisSession {
            summarizer: JsonSummarizer::new(self.config.temperature),
            builder: SummaryBuilder::new(self.extractor),
            config: self.config,
            describer: self.describer,
            completion,
        })
    }
}

impl Default for AnalysisSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
