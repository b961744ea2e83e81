//! Video-narration path: script preparation, render submission, and
//! status polling.

pub mod script;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::AnalyzeError;
use crate::ports::video::{RenderStatus, VideoRequest};

pub use script::NarrationScript;

/// Delay between render status polls.
const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Maximum number of status polls before giving up on a render.
const MAX_POLLS: u32 = 120;

/// A finished render job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutcome {
    /// Identifier assigned by the rendering service.
    pub video_id: String,
    /// Playback URL of the finished video.
    pub video_url: String,
}

/// Renders `narrative` as an avatar video and waits for completion.
///
/// The narrative is segmented into a narration script, submitted with the
/// configured avatar and voice, then polled until the render completes or
/// fails.
///
/// # Errors
///
/// Returns [`AnalyzeError::Service`] when the narrative is empty, the
/// render fails, or polling exceeds its attempt budget, and propagates
/// port errors from submission and status calls.
pub async fn render_narration(
    ctx: &ServiceContext,
    config: &Config,
    narrative: &str,
) -> Result<RenderOutcome, AnalyzeError> {
    let script = NarrationScript::from_narrative(narrative);
    if script.is_empty() {
        return Err(AnalyzeError::Service("narration text is empty".to_string()));
    }

    let request = VideoRequest {
        segments: script.segments,
        avatar_id: config.avatar_id.clone(),
        voice_id: config.voice_id.clone(),
    };
    let video_id = ctx.video.submit(&request).await?;
    let video_url = poll_until_done(ctx, &video_id).await?;

    Ok(RenderOutcome { video_id, video_url })
}

/// Polls the render status until the job completes or fails.
async fn poll_until_done(ctx: &ServiceContext, video_id: &str) -> Result<String, AnalyzeError> {
    for attempt in 0..MAX_POLLS {
        match ctx.video.status(video_id).await? {
            RenderStatus::Completed { video_url } => return Ok(video_url),
            RenderStatus::Failed(message) => {
                return Err(AnalyzeError::Service(format!("video render failed: {message}")));
            }
            RenderStatus::InProgress(stage) => {
                eprintln!("render {video_id}: {stage}... waiting");
            }
        }
        if attempt + 1 < MAX_POLLS {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
    Err(AnalyzeError::Service(format!("video render {video_id} did not finish in time")))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::render_narration;
    use crate::config::Config;
    use crate::context::ServiceContext;
    use crate::error::AnalyzeError;
    use crate::pipeline::tests::{sample_record, StubHost, StubLlm};
    use crate::ports::video::{
        RenderFuture, RenderStatus, StatusFuture, VideoRenderer, VideoRequest,
    };

    fn config() -> Config {
        Config {
            github_token: None,
            anthropic_api_key: Some("key".to_string()),
            heygen_api_key: Some("key".to_string()),
            avatar_id: "avatar-1".to_string(),
            voice_id: "voice-1".to_string(),
        }
    }

    /// Completes after a fixed number of in-progress polls.
    struct CountdownRenderer {
        remaining: AtomicU32,
    }

    impl VideoRenderer for CountdownRenderer {
        fn submit(&self, request: &VideoRequest) -> RenderFuture<'_> {
            assert_eq!(request.avatar_id, "avatar-1");
            assert_eq!(request.voice_id, "voice-1");
            assert!(!request.segments.is_empty());
            Box::pin(async { Ok("job-7".to_string()) })
        }

        fn status(&self, _video_id: &str) -> StatusFuture<'_> {
            let left = self.remaining.fetch_sub(1, Ordering::SeqCst);
            Box::pin(async move {
                if left > 1 {
                    Ok(RenderStatus::InProgress("processing".to_string()))
                } else {
                    Ok(RenderStatus::Completed {
                        video_url: "https://cdn.example/done.mp4".to_string(),
                    })
                }
            })
        }
    }

    struct FailingRenderer;

    impl VideoRenderer for FailingRenderer {
        fn submit(&self, _request: &VideoRequest) -> RenderFuture<'_> {
            Box::pin(async { Ok("job-8".to_string()) })
        }

        fn status(&self, _video_id: &str) -> StatusFuture<'_> {
            Box::pin(async { Ok(RenderStatus::Failed("avatar not found".to_string())) })
        }
    }

    fn ctx_with(renderer: Box<dyn VideoRenderer>) -> ServiceContext {
        ServiceContext {
            host: Box::new(StubHost { record: sample_record() }),
            llm: Box::new(StubLlm { reply: String::new() }),
            video: renderer,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn polls_until_completed() {
        let ctx = ctx_with(Box::new(CountdownRenderer { remaining: AtomicU32::new(3) }));
        let outcome = render_narration(&ctx, &config(), "A short narration.").await.expect("ok");
        assert_eq!(outcome.video_id, "job-7");
        assert_eq!(outcome.video_url, "https://cdn.example/done.mp4");
    }

    #[tokio::test]
    async fn failed_render_surfaces_service_error() {
        let ctx = ctx_with(Box::new(FailingRenderer));
        let err =
            render_narration(&ctx, &config(), "A short narration.").await.expect_err("must fail");
        assert!(matches!(err, AnalyzeError::Service(_)));
        assert!(err.to_string().contains("avatar not found"));
    }

    #[tokio::test]
    async fn empty_narrative_is_rejected_before_submission() {
        let ctx = ctx_with(Box::new(FailingRenderer));
        let err = render_narration(&ctx, &config(), "   ").await.expect_err("must fail");
        assert!(err.to_string().contains("empty"));
    }
}
