//! Image description via a vision-language model served over an
//! OpenAI-compatible chat-completions API.

use anyhow::Result;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use std::time::Duration;

/// System prompt used for the description request.
const DESCRIBE_SYSTEM_PROMPT: &str = "You are an assistant who perfectly describes images.";

/// Default user prompt asking for a full description.
pub const DEFAULT_DESCRIBE_PROMPT: &str = "Describe this image in detail please.";

/// Abstract interface to an image-description capability.
///
/// Implementations return plain descriptive text. Empty text is a valid
/// result and flows through the pipeline as a zero-match description, not
/// an error.
#[async_trait]
pub trait Describer: Send + Sync {
    /// Describe the given encoded image (PNG or JPEG bytes).
    async fn describe(&self, image: &[u8]) -> Result<String>;
}

/// Describer backed by a vision-language model behind a chat-completions
/// HTTP endpoint (e.g. a llama.cpp server running moondream2).
pub struct HttpDescriber {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    prompt: String,
}

impl HttpDescriber {
    /// Create a describer for `endpoint` using `model` and the default
    /// description prompt.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(super::TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            prompt: DEFAULT_DESCRIBE_PROMPT.to_string(),
        })
    }

    /// Replace the user prompt sent alongside the image.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[async_trait]
impl Describer for HttpDescriber {
    async fn describe(&self, image: &[u8]) -> Result<String> {
        let data_uri = image_to_data_uri(image);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": DESCRIBE_SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": [
                        { "type": "image_url", "image_url": { "url": data_uri } },
                        { "type": "text", "text": self.prompt }
                    ]
                }
            ],
        });

        let text = super::completion::chat(&self.client, &self.endpoint, &body).await?;
        Ok(text)
    }
}

/// Encode image bytes as a `data:` URI suitable for an `image_url`
/// content part.
pub fn image_to_data_uri(image: &[u8]) -> String {
    let base64_data = general_purpose::STANDARD.encode(image);
    format!("data:image/png;base64,{base64_data}")
}
