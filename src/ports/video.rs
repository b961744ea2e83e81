//! Video renderer port for avatar-narrated video generation.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

/// Boxed future resolving to the render job identifier.
pub type RenderFuture<'a> = Pin<Box<dyn Future<Output = Result<String, AnalyzeError>> + Send + 'a>>;

/// Boxed future resolving to the current render status.
pub type StatusFuture<'a> =
    Pin<Box<dyn Future<Output = Result<RenderStatus, AnalyzeError>> + Send + 'a>>;

/// A render submission: narration segments plus avatar/voice selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRequest {
    /// Narration text, one scene per segment.
    pub segments: Vec<String>,
    /// Avatar identifier at the rendering service.
    pub avatar_id: String,
    /// Voice identifier at the rendering service.
    pub voice_id: String,
}

/// State of a submitted render job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStatus {
    /// Still queued or rendering; carries the service's stage label.
    InProgress(String),
    /// Render finished; the video is available at `video_url`.
    Completed {
        /// Download/playback URL for the finished video.
        video_url: String,
    },
    /// Render failed; carries the service's failure message.
    Failed(String),
}

/// Submits render jobs and reports their progress.
pub trait VideoRenderer: Send + Sync {
    /// Submits a render job, returning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::Service`] on transport or API-level failure,
    /// or [`AnalyzeError::MissingCredential`] when the renderer is not
    /// configured.
    fn submit(&self, request: &VideoRequest) -> RenderFuture<'_>;

    /// Reports the status of a previously submitted job.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::Service`] on transport or API-level failure,
    /// or [`AnalyzeError::MissingCredential`] when the renderer is not
    /// configured.
    fn status(&self, video_id: &str) -> StatusFuture<'_>;
}
