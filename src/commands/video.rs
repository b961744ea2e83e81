//! `repotell video` command.

use std::path::Path;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::video::render_narration;

/// Execute the `video` command.
///
/// Renders the given narration text (inline or from a file) as an avatar
/// video and prints the resulting URL.
///
/// # Errors
///
/// Returns an error string when no text is provided, the file cannot be
/// read, credentials are missing, or the render fails.
pub fn run(config: &Config, text: Option<&str>, file: Option<&Path>) -> Result<(), String> {
    let narrative = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        (None, None) => return Err("provide narration text via --text or --file".to_string()),
    };

    let ctx = ServiceContext::live_video(config).map_err(|e| e.to_string())?;
    let runtime = super::runtime()?;

    eprintln!("Submitting narration for rendering...");
    let outcome =
        runtime.block_on(render_narration(&ctx, config, &narrative)).map_err(|e| e.to_string())?;

    println!("Video ready: {}", outcome.video_url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::config::Config;

    #[test]
    fn requires_text_or_file() {
        let config = Config {
            github_token: None,
            anthropic_api_key: None,
            heygen_api_key: None,
            avatar_id: "a".to_string(),
            voice_id: "v".to_string(),
        };
        let err = run(&config, None, None).expect_err("must fail");
        assert!(err.contains("--text"));
    }
}
