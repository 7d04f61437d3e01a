//! # Model Capability Seams
//!
//! Abstract interfaces to the two external language-model capabilities the
//! pipeline consumes, plus HTTP implementations for OpenAI-compatible chat
//! completion endpoints (e.g. a llama.cpp server):
//! - `Describer`: image bytes in, free-text description out
//! - `CompletionProvider`: prompt in, text (expected to be JSON) out
//!
//! The core pipeline only ever sees the traits; concrete providers are
//! injected through the session builder, which keeps model lifecycle
//! concerns (loading, caching, process-wide instances) entirely outside
//! the core.

pub mod completion;
pub mod describe;

pub use completion::{CompletionProvider, HttpCompletion};
pub use describe::{Describer, HttpDescriber};

/// Default chat-completions endpoint for a locally running model server.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080";

/// Per-request timeout applied by the HTTP providers.
pub(crate) const TIMEOUT_SECS: u64 = 30;
