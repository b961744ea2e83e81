//! Request/response envelopes for the wrapping HTTP surface.
//!
//! Server framing (routing, CORS, listener) is outside this crate's
//! scope; these functions take a raw JSON body and produce a status code
//! plus JSON value so any transport can wrap them.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::pipeline;
use crate::ports::repo_host::parse_repo_url;

/// POST body accepted by the analyze endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Repository URL to analyze.
    pub repo_url: Option<String>,
    /// User's analysis prompt.
    pub prompt: Option<String>,
    /// Per-request repository-host token override.
    pub github_token: Option<String>,
    /// Per-request generative-service credential override.
    pub anthropic_api_key: Option<String>,
}

/// Status code plus JSON body, ready for any HTTP wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON response body.
    pub body: Value,
}

/// Handles a POST to the analyze endpoint.
///
/// Validates the body, merges per-request credential overrides over the
/// environment configuration, and runs the pipeline. All failures are
/// mapped to the `{success: false, error, status_code}` envelope.
pub async fn handle_analyze(config: &Config, body: &str) -> ApiResponse {
    let Ok(request) = serde_json::from_str::<AnalyzeRequest>(body) else {
        return error_response(400, "Invalid JSON in request body");
    };

    let Some(repo_url) = request.repo_url.clone().filter(|url| !url.is_empty()) else {
        return error_response(400, "Missing required field: repo_url");
    };
    let Some(prompt) = request.prompt.clone().filter(|prompt| !prompt.is_empty()) else {
        return error_response(400, "Missing required field: prompt");
    };
    if let Err(err) = parse_repo_url(&repo_url) {
        return error_response(err.status_code(), &err.to_string());
    }

    let effective = Config {
        github_token: request.github_token.or_else(|| config.github_token.clone()),
        anthropic_api_key: request
            .anthropic_api_key
            .or_else(|| config.anthropic_api_key.clone()),
        ..config.clone()
    };

    let ctx = match ServiceContext::live(&effective) {
        Ok(ctx) => ctx,
        Err(err) => return error_response(err.status_code(), &err.to_string()),
    };

    handle_analyze_with(&ctx, &repo_url, &prompt).await
}

/// Runs the pipeline against an already-wired context and envelopes the
/// result. Split out so tests can substitute stub ports.
pub async fn handle_analyze_with(
    ctx: &ServiceContext,
    repo_url: &str,
    prompt: &str,
) -> ApiResponse {
    match pipeline::analyze(ctx, repo_url, prompt).await {
        Ok(report) => ApiResponse {
            status: 200,
            body: json!({
                "success": true,
                "repo_url": repo_url,
                "repo_name": report.repo_name,
                "summary": report.summary,
                "stats": report.stats,
                "metadata": {
                    "language": report.metadata.language,
                    "stars": report.metadata.stars,
                    "description": report.metadata.description,
                },
            }),
        },
        Err(err) => error_response(err.status_code(), &err.to_string()),
    }
}

/// Static service description returned for GET requests.
#[must_use]
pub fn service_info() -> Value {
    json!({
        "service": "Repository Analyzer",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoint": "/api/analyze",
        "method": "POST",
        "description": "Analyzes source repositories using an LLM",
        "required_fields": ["repo_url", "prompt"],
        "optional_fields": ["github_token", "anthropic_api_key"],
        "example": {
            "repo_url": "https://github.com/user/repo",
            "prompt": "Analyze this codebase and provide a comprehensive summary",
        },
    })
}

/// Builds the error envelope shared by every failure path.
fn error_response(status: u16, message: &str) -> ApiResponse {
    ApiResponse {
        status,
        body: json!({
            "success": false,
            "error": message,
            "status_code": status,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_analyze, handle_analyze_with, service_info};
    use crate::config::Config;
    use crate::pipeline::tests::{sample_record, stub_context};

    fn config() -> Config {
        Config {
            github_token: None,
            anthropic_api_key: None,
            heygen_api_key: None,
            avatar_id: "avatar".to_string(),
            voice_id: "voice".to_string(),
        }
    }

    #[tokio::test]
    async fn rejects_invalid_json() {
        let response = handle_analyze(&config(), "{not json").await;
        assert_eq!(response.status, 400);
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["error"], "Invalid JSON in request body");
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let response = handle_analyze(&config(), r#"{"prompt": "hi"}"#).await;
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "Missing required field: repo_url");

        let response =
            handle_analyze(&config(), r#"{"repo_url": "https://github.com/a/b"}"#).await;
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "Missing required field: prompt");
    }

    #[tokio::test]
    async fn rejects_malformed_repo_url() {
        let body = r#"{"repo_url": "https://github.com/acme", "prompt": "hi"}"#;
        let response = handle_analyze(&config(), body).await;
        assert_eq!(response.status, 400);
        assert_eq!(response.body["status_code"], 400);
    }

    #[tokio::test]
    async fn missing_credential_maps_to_server_error() {
        let body = r#"{"repo_url": "https://github.com/acme/widgets", "prompt": "hi"}"#;
        let response = handle_analyze(&config(), body).await;
        assert_eq!(response.status, 500);
        assert_eq!(response.body["error"], "ANTHROPIC_API_KEY is not configured");
    }

    #[tokio::test]
    async fn success_envelope_carries_summary_stats_and_metadata() {
        let ctx = stub_context(sample_record(), "A detailed narrative.");
        let response =
            handle_analyze_with(&ctx, "https://github.com/acme/widgets", "Explain it").await;

        assert_eq!(response.status, 200);
        assert_eq!(response.body["success"], true);
        assert_eq!(response.body["repo_name"], "acme/widgets");
        assert_eq!(response.body["summary"], "A detailed narrative.");
        assert_eq!(response.body["stats"]["total_files"], 1);
        assert_eq!(response.body["metadata"]["language"], "Rust");
    }

    #[test]
    fn service_info_names_required_fields() {
        let info = service_info();
        assert_eq!(info["method"], "POST");
        assert_eq!(info["required_fields"][0], "repo_url");
        assert_eq!(info["required_fields"][1], "prompt");
    }
}
