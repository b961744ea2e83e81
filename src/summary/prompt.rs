//! Completion Request Builder: fixed instruction plus context and prompt.

use crate::ports::llm::CompletionRequest;

/// Default model used for codebase analysis.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default completion budget.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 1.0;

/// Fixed system instruction framing the model as a code analyst.
pub const SYSTEM_PROMPT: &str = "You are an expert software engineer and code analyst.
You will be provided with information about a GitHub repository including its structure,
dependencies, key files, and metadata. Your task is to analyze this codebase and provide
insightful, accurate, and comprehensive responses to the user's questions or requests.

Focus on:
- Understanding the overall architecture and design patterns
- Identifying key technologies and frameworks used
- Explaining how different components interact
- Highlighting notable features or implementation details
- Providing practical insights for developers working with this code

Be thorough but concise. Use your expertise to provide value beyond what's immediately
obvious from the file structure.";

/// Assembles a [`CompletionRequest`] from a context summary and the user's
/// verbatim prompt.
///
/// The two are interpolated into a fixed user-message template with a
/// literal separator line; no truncation happens here.
#[must_use]
pub fn build_completion_request(context: &str, user_prompt: &str) -> CompletionRequest {
    CompletionRequest {
        model: DEFAULT_MODEL.to_string(),
        system: SYSTEM_PROMPT.to_string(),
        user_message: format!(
            "Here is the repository information:\n\n{context}\n\n---\n\nUser's Request:\n\
             {user_prompt}\n\nPlease analyze the codebase and respond to the user's request."
        ),
        max_tokens: DEFAULT_MAX_TOKENS,
        temperature: DEFAULT_TEMPERATURE,
    }
}
