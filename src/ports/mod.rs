//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (repository host, generative service, video renderer).
//! Implementations live in `src/adapters/`.

pub mod llm;
pub mod repo_host;
pub mod video;

pub use llm::{CompletionFuture, CompletionRequest, LlmClient, StreamFuture, TextSink};
pub use repo_host::{parse_repo_url, FetchFuture, RepoHost};
pub use video::{RenderFuture, RenderStatus, StatusFuture, VideoRenderer, VideoRequest};
