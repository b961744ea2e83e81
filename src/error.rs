//! Typed failure conditions surfaced at the request boundary.
//!
//! Dependency-manifest parsing failures are deliberately absent: the
//! extractor absorbs them into empty or partial lists because the
//! dependency listing is informational, not load-bearing.

use thiserror::Error;

/// Failure conditions produced by the analysis pipeline and its adapters.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The repository URL is malformed or does not name a repository.
    #[error("Invalid repository URL: {0}")]
    InvalidIdentifier(String),

    /// The repository host rejected or failed the fetch.
    #[error("Failed to fetch repository: {0}")]
    HostFetch(String),

    /// A required service credential is not configured.
    #[error("{0} is not configured")]
    MissingCredential(&'static str),

    /// An external service call failed after credentials were in place.
    #[error("{0}")]
    Service(String),
}

impl AnalyzeError {
    /// HTTP status class for the request boundary's error envelope.
    ///
    /// Malformed input and host failures map to 400; configuration and
    /// downstream service failures map to 500.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidIdentifier(_) | Self::HostFetch(_) => 400,
            Self::MissingCredential(_) | Self::Service(_) => 500,
        }
    }
}
