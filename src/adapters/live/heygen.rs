//! Live adapter for the `VideoRenderer` port using the HeyGen v2 API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;
use crate::ports::video::{RenderFuture, RenderStatus, StatusFuture, VideoRenderer, VideoRequest};

const HEYGEN_API_URL: &str = "https://api.heygen.com/v2";

/// Live video renderer backed by the HeyGen generate/status endpoints.
pub struct LiveVideoRenderer {
    client: Client,
    api_key: String,
}

impl LiveVideoRenderer {
    /// Creates a new live renderer with the given credential.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key }
    }
}

impl VideoRenderer for LiveVideoRenderer {
    fn submit(&self, request: &VideoRequest) -> RenderFuture<'_> {
        let body = GenerateRequest::from_request(request);

        Box::pin(async move {
            let response = self
                .client
                .post(format!("{HEYGEN_API_URL}/video/generate"))
                .header("x-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| AnalyzeError::Service(format!("HeyGen request failed: {e}")))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| AnalyzeError::Service(format!("failed to read response: {e}")))?;

            if !status.is_success() {
                return Err(AnalyzeError::Service(format!(
                    "HeyGen API error ({}): {body}",
                    status.as_u16()
                )));
            }

            let parsed: GenerateResponse = serde_json::from_str(&body)
                .map_err(|e| AnalyzeError::Service(format!("failed to parse response: {e}")))?;
            parsed
                .data
                .and_then(|d| d.video_id)
                .ok_or_else(|| AnalyzeError::Service(format!("no video_id in response: {body}")))
        })
    }

    fn status(&self, video_id: &str) -> StatusFuture<'_> {
        let url = format!("{HEYGEN_API_URL}/video/status/{video_id}");

        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .header("x-api-key", &self.api_key)
                .send()
                .await
                .map_err(|e| AnalyzeError::Service(format!("HeyGen request failed: {e}")))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| AnalyzeError::Service(format!("failed to read response: {e}")))?;

            if !status.is_success() {
                return Err(AnalyzeError::Service(format!(
                    "HeyGen API error ({}): {body}",
                    status.as_u16()
                )));
            }

            let parsed: StatusResponse = serde_json::from_str(&body)
                .map_err(|e| AnalyzeError::Service(format!("failed to parse response: {e}")))?;
            let data = parsed
                .data
                .ok_or_else(|| AnalyzeError::Service(format!("no data in response: {body}")))?;
            Ok(map_status(data))
        })
    }
}

/// Maps the service's status payload onto [`RenderStatus`].
fn map_status(data: StatusData) -> RenderStatus {
    match data.status.as_str() {
        "completed" => RenderStatus::Completed { video_url: data.video_url.unwrap_or_default() },
        "failed" => {
            RenderStatus::Failed(data.error.unwrap_or_else(|| "render failed".to_string()))
        }
        other => RenderStatus::InProgress(other.to_string()),
    }
}

/// Request body for video generation.
#[derive(Serialize)]
struct GenerateRequest {
    caption: bool,
    dimension: Dimension,
    video_inputs: Vec<VideoInput>,
}

impl GenerateRequest {
    /// One scene per narration segment, all sharing the same avatar, voice,
    /// and plain background.
    fn from_request(request: &VideoRequest) -> Self {
        Self {
            caption: false,
            dimension: Dimension { width: 1280, height: 720 },
            video_inputs: request
                .segments
                .iter()
                .map(|segment| VideoInput {
                    character: Character {
                        kind: "avatar",
                        avatar_id: request.avatar_id.clone(),
                        scale: 1,
                        avatar_style: "normal",
                        talking_style: "stable",
                        expression: "default",
                        super_resolution: true,
                        matting: true,
                    },
                    voice: Voice {
                        kind: "text",
                        voice_id: request.voice_id.clone(),
                        input_text: segment.clone(),
                        speed: 1.0,
                        pitch: 1.0,
                        emotion: "Excited",
                    },
                    background: Background { kind: "color", value: "#FFFFFF" },
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct Dimension {
    width: u32,
    height: u32,
}

#[derive(Serialize)]
struct VideoInput {
    character: Character,
    voice: Voice,
    background: Background,
}

#[derive(Serialize)]
struct Character {
    #[serde(rename = "type")]
    kind: &'static str,
    avatar_id: String,
    scale: u32,
    avatar_style: &'static str,
    talking_style: &'static str,
    expression: &'static str,
    super_resolution: bool,
    matting: bool,
}

#[derive(Serialize)]
struct Voice {
    #[serde(rename = "type")]
    kind: &'static str,
    voice_id: String,
    input_text: String,
    speed: f32,
    pitch: f32,
    emotion: &'static str,
}

#[derive(Serialize)]
struct Background {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'static str,
}

/// Response from the generate endpoint.
#[derive(Deserialize)]
struct GenerateResponse {
    data: Option<GenerateData>,
}

#[derive(Deserialize)]
struct GenerateData {
    video_id: Option<String>,
}

/// Response from the status endpoint.
#[derive(Deserialize)]
struct StatusResponse {
    data: Option<StatusData>,
}

/// Status payload for a render job.
#[derive(Deserialize)]
struct StatusData {
    status: String,
    video_url: Option<String>,
    error: Option<String>,
}
