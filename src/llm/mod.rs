//! Reasoning-Model Backend Module
//!
//! Provides a unified interface over reasoning-model endpoints that return
//! both a chain-of-thought (`rationale`) and a final answer per call.
//!
//! ## Call kinds
//!
//! - **Classification / planning calls** carry a system instruction and
//!   request a strict JSON object from the model.
//! - **Trend calls** are free-form prose, no system instruction.
//!
//! The backend is deliberately opaque to the pipeline: one prompt in,
//! one `(rationale, answer)` pair out, errors propagated as `anyhow`.

use anyhow::Result;
use async_trait::async_trait;

mod openai_compat;
pub use openai_compat::OpenAiCompatBackend;

/// Marker error for a timed-out model call.
///
/// Backends attach this to the error chain when the transport reports a
/// timeout, so callers can tell an expired call budget apart from other
/// failures: a timed-out stance call abstains, anything else is fatal
/// for the window.
#[derive(Debug, thiserror::Error)]
#[error("model call timed out")]
pub struct ModelTimeout;

/// One request to the reasoning model.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    /// Optional system instruction (strict-format calls set this).
    pub system: Option<String>,
    /// The user prompt.
    pub prompt: String,
    /// Request a JSON object response from endpoints that support it.
    pub json_mode: bool,
}

impl ModelRequest {
    /// Free-form call: prompt only.
    pub fn freeform(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            json_mode: false,
        }
    }

    /// Strict-JSON call with a system instruction.
    pub fn json(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            prompt: prompt.into(),
            json_mode: true,
        }
    }
}

/// The model's reply: reasoning text plus the final answer text.
#[derive(Debug, Clone)]
pub struct ModelReply {
    /// Chain-of-thought / reasoning content. Empty when the endpoint
    /// does not expose it.
    pub rationale: String,
    /// Final answer text (a JSON string for json-mode calls).
    pub answer: String,
}

/// Unified trait for reasoning-model backends.
#[async_trait]
pub trait ReasoningBackend: Send + Sync {
    /// Issue one blocking model call.
    async fn generate(&self, request: ModelRequest) -> Result<ModelReply>;

    /// Backend name for logging.
    fn backend_name(&self) -> &'static str;
}
