//! Live adapter for the `LlmClient` port using the Anthropic messages API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;
use crate::ports::llm::{CompletionFuture, CompletionRequest, LlmClient, StreamFuture, TextSink};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Live LLM client that calls the Anthropic messages API.
pub struct LiveLlmClient {
    client: Client,
    api_key: String,
}

impl LiveLlmClient {
    /// Creates a new live LLM client with the given credential.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key }
    }

    async fn send(
        &self,
        request: &ApiRequest<'_>,
    ) -> Result<reqwest::Response, AnalyzeError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await
            .map_err(|e| AnalyzeError::Service(format!("Claude API request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalyzeError::Service(format!("failed to read error response: {e}")))?;
        let message = serde_json::from_str::<ApiError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        Err(AnalyzeError::Service(format!("Claude API error ({}): {message}", status.as_u16())))
    }
}

impl LlmClient for LiveLlmClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let body = ApiRequest::from_completion(&request, false);
            let response = self.send(&body).await?;

            let api_response: ApiResponse = response
                .json()
                .await
                .map_err(|e| AnalyzeError::Service(format!("failed to parse response: {e}")))?;

            Ok(api_response.content.into_iter().map(|block| block.text).collect())
        })
    }

    fn complete_streaming<'a>(
        &'a self,
        request: &CompletionRequest,
        mut sink: TextSink<'a>,
    ) -> StreamFuture<'a> {
        let request = request.clone();

        Box::pin(async move {
            let body = ApiRequest::from_completion(&request, true);
            let mut response = self.send(&body).await?;

            let mut buffer = String::new();
            let mut text = String::new();

            while let Some(chunk) = response
                .chunk()
                .await
                .map_err(|e| AnalyzeError::Service(format!("stream read failed: {e}")))?
            {
                buffer.push_str(&String::from_utf8_lossy(&chunk));
                while let Some(pos) = buffer.find('\n') {
                    let line = buffer[..pos].trim_end_matches('\r').to_string();
                    buffer.drain(..=pos);
                    if let Some(delta) = parse_stream_line(&line)? {
                        sink(&delta);
                        text.push_str(&delta);
                    }
                }
            }

            Ok(text)
        })
    }
}

/// Parses one server-sent-event line, returning the text delta it carries,
/// if any.
///
/// # Errors
///
/// Returns [`AnalyzeError::Service`] when the line is an API error event.
fn parse_stream_line(line: &str) -> Result<Option<String>, AnalyzeError> {
    let Some(payload) = line.strip_prefix("data: ") else {
        return Ok(None);
    };
    let Ok(event) = serde_json::from_str::<StreamEvent>(payload) else {
        return Ok(None);
    };

    match event.kind.as_str() {
        "content_block_delta" => Ok(event.delta.and_then(|d| d.text)),
        "error" => {
            let message =
                event.error.map_or_else(|| "unknown stream error".to_string(), |e| e.message);
            Err(AnalyzeError::Service(format!("Claude API error: {message}")))
        }
        _ => Ok(None),
    }
}

/// Request body sent to the messages API.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
    #[serde(skip_serializing_if = "is_false")]
    stream: bool,
}

impl<'a> ApiRequest<'a> {
    fn from_completion(request: &'a CompletionRequest, stream: bool) -> Self {
        Self {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: &request.system,
            messages: vec![ApiMessage { role: "user", content: &request.user_message }],
            stream,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// A single message in the API request.
#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Top-level response from the messages API.
#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

/// A content block in the response.
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// One server-sent event in a streaming response.
#[derive(Deserialize)]
struct StreamEvent {
    #[serde(rename = "type")]
    kind: String,
    delta: Option<StreamDelta>,
    error: Option<ApiErrorDetail>,
}

/// Delta payload inside a `content_block_delta` event.
#[derive(Deserialize)]
struct StreamDelta {
    text: Option<String>,
}

/// Error response from the API.
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

/// Detail inside an error response.
#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}
