//! Command dispatch and handlers.

pub mod analyze;
pub mod video;

use crate::cli::Command;
use crate::config::Config;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env();
    match command {
        Command::Analyze { repo_url, prompt, stream, video } => {
            analyze::run(&config, repo_url, prompt, *stream, *video)
        }
        Command::Video { text, file } => video::run(&config, text.as_deref(), file.as_deref()),
    }
}

/// Builds the single-threaded runtime that drives the async port calls.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))
}
