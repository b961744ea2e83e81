//! Service context bundling all port trait objects.

use crate::adapters::live::anthropic::LiveLlmClient;
use crate::adapters::live::github::LiveRepoHost;
use crate::adapters::live::heygen::LiveVideoRenderer;
use crate::config::Config;
use crate::error::AnalyzeError;
use crate::ports::llm::{CompletionFuture, CompletionRequest, LlmClient, StreamFuture, TextSink};
use crate::ports::repo_host::RepoHost;
use crate::ports::video::{RenderFuture, StatusFuture, VideoRenderer, VideoRequest};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire
/// up adapter implementations; tests substitute their own stubs.
pub struct ServiceContext {
    /// Repository host for metadata, tree, and file fetches.
    pub host: Box<dyn RepoHost>,
    /// Generative service for completions.
    pub llm: Box<dyn LlmClient>,
    /// Avatar-video rendering service.
    pub video: Box<dyn VideoRenderer>,
}

impl ServiceContext {
    /// Creates a live context from configuration.
    ///
    /// The video port degrades to an adapter that reports its missing
    /// credential when `HEYGEN_API_KEY` is absent, so analysis-only runs
    /// need no rendering credential.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::MissingCredential`] when
    /// `ANTHROPIC_API_KEY` is not configured. This check happens before
    /// any network call is attempted.
    pub fn live(config: &Config) -> Result<Self, AnalyzeError> {
        let api_key = config
            .anthropic_api_key
            .clone()
            .ok_or(AnalyzeError::MissingCredential("ANTHROPIC_API_KEY"))?;

        let video: Box<dyn VideoRenderer> = match &config.heygen_api_key {
            Some(key) => Box::new(LiveVideoRenderer::new(key.clone())),
            None => Box::new(UnconfiguredVideoRenderer),
        };

        Ok(Self {
            host: Box::new(LiveRepoHost::new(config.github_token.clone())),
            llm: Box::new(LiveLlmClient::new(api_key)),
            video,
        })
    }

    /// Creates a live context for the video-only path.
    ///
    /// The generative port is not wired; calling it reports its missing
    /// credential.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::MissingCredential`] when `HEYGEN_API_KEY`
    /// is not configured.
    pub fn live_video(config: &Config) -> Result<Self, AnalyzeError> {
        let api_key = config
            .heygen_api_key
            .clone()
            .ok_or(AnalyzeError::MissingCredential("HEYGEN_API_KEY"))?;

        Ok(Self {
            host: Box::new(LiveRepoHost::new(config.github_token.clone())),
            llm: Box::new(UnconfiguredLlmClient),
            video: Box::new(LiveVideoRenderer::new(api_key)),
        })
    }
}

// --- Error-returning adapters for unconfigured ports ---

/// Stands in for the generative port in video-only contexts.
struct UnconfiguredLlmClient;

impl LlmClient for UnconfiguredLlmClient {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        Box::pin(async { Err(AnalyzeError::MissingCredential("ANTHROPIC_API_KEY")) })
    }

    fn complete_streaming<'a>(
        &'a self,
        _request: &CompletionRequest,
        _sink: TextSink<'a>,
    ) -> StreamFuture<'a> {
        Box::pin(async { Err(AnalyzeError::MissingCredential("ANTHROPIC_API_KEY")) })
    }
}

/// Stands in for the video port when no rendering credential is set.
struct UnconfiguredVideoRenderer;

impl VideoRenderer for UnconfiguredVideoRenderer {
    fn submit(&self, _request: &VideoRequest) -> RenderFuture<'_> {
        Box::pin(async { Err(AnalyzeError::MissingCredential("HEYGEN_API_KEY")) })
    }

    fn status(&self, _video_id: &str) -> StatusFuture<'_> {
        Box::pin(async { Err(AnalyzeError::MissingCredential("HEYGEN_API_KEY")) })
    }
}
