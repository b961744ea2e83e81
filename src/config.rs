//! Runtime configuration read from the environment.
//!
//! `main` loads `.env` via `dotenvy` before this runs. Credentials are
//! never embedded in the binary; avatar and voice selection have public
//! defaults that can be overridden.

use std::env;

/// Default avatar at the rendering service (a public stock avatar).
const DEFAULT_AVATAR_ID: &str = "Annie_Office_Sitting_Side_2_public";

/// Default voice at the rendering service.
const DEFAULT_VOICE_ID: &str = "f8c69e517f424cafaecde32dde57096b";

/// Credentials and rendering selections for the external services.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional repository-host token for higher rate limits.
    pub github_token: Option<String>,
    /// Generative-service credential; required for analysis.
    pub anthropic_api_key: Option<String>,
    /// Video-rendering credential; required only for the video path.
    pub heygen_api_key: Option<String>,
    /// Avatar identifier for rendered videos.
    pub avatar_id: String,
    /// Voice identifier for rendered videos.
    pub voice_id: String,
}

impl Config {
    /// Reads configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            github_token: non_empty_var("GITHUB_TOKEN"),
            anthropic_api_key: non_empty_var("ANTHROPIC_API_KEY"),
            heygen_api_key: non_empty_var("HEYGEN_API_KEY"),
            avatar_id: non_empty_var("HEYGEN_AVATAR_ID")
                .unwrap_or_else(|| DEFAULT_AVATAR_ID.to_string()),
            voice_id: non_empty_var("HEYGEN_VOICE_ID")
                .unwrap_or_else(|| DEFAULT_VOICE_ID.to_string()),
        }
    }
}

/// Reads an environment variable, treating empty values as absent.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::non_empty_var;

    #[test]
    fn unset_variable_is_absent() {
        assert_eq!(non_empty_var("REPOTELL_TEST_UNSET_VAR"), None);
    }

    #[test]
    fn blank_variable_is_absent() {
        std::env::set_var("REPOTELL_TEST_BLANK_VAR", "   ");
        assert_eq!(non_empty_var("REPOTELL_TEST_BLANK_VAR"), None);
    }

    #[test]
    fn set_variable_is_read() {
        std::env::set_var("REPOTELL_TEST_SET_VAR", "value");
        assert_eq!(non_empty_var("REPOTELL_TEST_SET_VAR"), Some("value".to_string()));
    }
}
