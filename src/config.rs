//! # Configuration Module
//!
//! Configuration for the analysis pipeline, shared between the CLI and
//! library embedders. Validation happens at the calling boundary with
//! helpful error messages; the core stages themselves guard their own
//! edge cases (a non-positive area yields a zero density, never an
//! error).
//!
//! ## Parameters
//!
//! | Parameter | Type | Default | Description |
//! |-----------|------|---------|-------------|
//! | `endpoint` | `String` | `http://127.0.0.1:8080` | Chat-completions base URL |
//! | `model` | `String` | `moondream2` | Model name sent with each request |
//! | `area` | `f64` | 100.0 | ODD area denominator |
//! | `temperature` | `f32` | 0.7 | Sampling temperature for summarization |
//! | `prompt` | `String` | "Describe this image in detail please." | Description request prompt |

use crate::model::DEFAULT_ENDPOINT;
use crate::model::describe::DEFAULT_DESCRIBE_PROMPT;
use crate::pipeline::summarize::DEFAULT_TEMPERATURE;

/// Default model name for a locally served vision-language model.
pub const DEFAULT_MODEL: &str = "moondream2";

/// Default area denominator for the Object Density Descriptor.
pub const DEFAULT_AREA: f64 = 100.0;

/// Configuration for an analysis session.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Base URL of the chat-completions endpoint serving the model.
    pub endpoint: String,

    /// Model name passed in each request body.
    pub model: String,

    /// Area denominator for the density metric. A caller-supplied
    /// constant, not derived from the image; non-positive values produce
    /// a density of zero.
    pub area: f64,

    /// Sampling temperature for the JSON summarization pass.
    pub temperature: f32,

    /// User prompt sent alongside the image when requesting a
    /// description.
    pub prompt: String,
}

impl PipelineConfig {
    /// Create a configuration with explicit endpoint, model, and area,
    /// keeping default temperature and prompt.
    pub fn new(endpoint: String, model: String, area: f64) -> Self {
        Self {
            endpoint,
            model,
            area,
            ..Self::default()
        }
    }

    /// Validate the configuration, returning a descriptive message on
    /// the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("Endpoint must not be empty".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!(
                "Endpoint must be an http(s) URL, got: {}",
                self.endpoint
            ));
        }
        if self.model.is_empty() {
            return Err("Model name must not be empty".to_string());
        }
        if !self.area.is_finite() {
            return Err(format!("Area must be a finite number, got: {}", self.area));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got: {}",
                self.temperature
            ));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            area: DEFAULT_AREA,
            temperature: DEFAULT_TEMPERATURE,
            prompt: DEFAULT_DESCRIBE_PROMPT.to_string(),
        }
    }
}
