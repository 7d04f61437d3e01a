//! JSON-constrained text completion over an OpenAI-compatible
//! chat-completions API.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::error::ModelError;

/// Abstract interface to a text-generation service.
///
/// The summarization pass supplies a system prompt, a user prompt, a
/// sampling temperature, and an optional JSON-schema hint. Providers are
/// not assumed to enforce the hint; callers parse the returned text
/// themselves.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request a single completion. Blocks (awaits) until the model
    /// replies; there is no cancellation beyond the provider's own
    /// request timeout.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        schema: Option<&serde_json::Value>,
    ) -> Result<String>;
}

/// Completion provider backed by a chat-completions HTTP endpoint
/// (llama.cpp server, vLLM, or anything OpenAI-compatible).
pub struct HttpCompletion {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HttpCompletion {
    /// Create a provider for `endpoint` (base URL, no trailing path)
    /// using `model`.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(super::TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletion {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        schema: Option<&serde_json::Value>,
    ) -> Result<String> {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "temperature": temperature,
        });
        if let Some(schema) = schema {
            body["response_format"] = serde_json::json!({
                "type": "json_object",
                "schema": schema,
            });
        }

        let text = chat(&self.client, &self.endpoint, &body).await?;
        Ok(text)
    }
}

/// POST `body` to the endpoint's chat-completions route and extract the
/// assistant message text.
///
/// Shared by the completion and describe providers; both speak the same
/// wire format and differ only in how they assemble the message list.
pub(crate) async fn chat(
    client: &reqwest::Client,
    endpoint: &str,
    body: &serde_json::Value,
) -> Result<String, ModelError> {
    let url = format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'));

    let resp = client
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|source| ModelError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

    let status = resp.status();
    let json: serde_json::Value =
        resp.json().await.map_err(|source| ModelError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

    if !status.is_success() {
        let message = json["error"]["message"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .unwrap_or("unknown error")
            .to_string();
        return Err(ModelError::Status {
            status: status.as_u16(),
            message,
        });
    }

    json["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .and_then(|choice| choice["message"]["content"].as_str())
        .map(str::to_string)
        .ok_or_else(|| ModelError::Shape {
            context: "choices[0].message.content".to_string(),
        })
}
