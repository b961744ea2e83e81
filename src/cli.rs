//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `repotell`.
#[derive(Debug, Parser)]
#[command(name = "repotell", version, about = "Analyze repositories and narrate them as video")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a repository and print the generated narrative.
    Analyze {
        /// Repository URL (e.g. `https://github.com/owner/name`).
        repo_url: String,
        /// Analysis prompt sent alongside the repository context.
        #[arg(
            short,
            long,
            default_value = "Analyze this codebase and provide a comprehensive summary"
        )]
        prompt: String,
        /// Print the narrative incrementally as it is generated.
        #[arg(long)]
        stream: bool,
        /// Render the narrative as an avatar video after analysis.
        #[arg(long)]
        video: bool,
    },
    /// Render a narration video from existing text.
    Video {
        /// Narration text.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Read the narration text from a file instead.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}
