//! Generative-service port for language-model completions.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

/// Boxed future type alias used by [`LlmClient`] to keep the trait
/// dyn-compatible.
pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, AnalyzeError>> + Send + 'a>>;

/// Boxed future for the streaming variant; resolves to the full
/// accumulated text after the final chunk has been delivered to the sink.
pub type StreamFuture<'a> = Pin<Box<dyn Future<Output = Result<String, AnalyzeError>> + Send + 'a>>;

/// Receives incremental text chunks during a streaming completion.
pub type TextSink<'a> = Box<dyn FnMut(&str) + Send + 'a>;

/// A fully assembled completion request.
///
/// Bounding of the context happened upstream in the Context Builder; no
/// truncation is applied at or after this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Fixed system instruction.
    pub system: String,
    /// User message with the context and prompt interpolated.
    pub user_message: String,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Sends completion requests to a language model.
pub trait LlmClient: Send + Sync {
    /// Generates a completion for the given request.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::Service`] on transport or API-level failure.
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_>;

    /// Generates a completion, delivering incremental chunks to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::Service`] on transport or API-level failure.
    fn complete_streaming<'a>(
        &'a self,
        request: &CompletionRequest,
        sink: TextSink<'a>,
    ) -> StreamFuture<'a>;
}
