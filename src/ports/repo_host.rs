//! Repository host port: metadata, file tree, and candidate file fetch.

use std::future::Future;
use std::pin::Pin;

use crate::error::AnalyzeError;
use crate::repo::RepositoryRecord;

/// Substring that identifies a supported repository URL.
const HOST_MARKER: &str = "github.com/";

/// Boxed future type alias used by [`RepoHost`] to keep the trait
/// dyn-compatible.
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<RepositoryRecord, AnalyzeError>> + Send + 'a>>;

/// Fetches repository data from the source host.
///
/// Implementations must return a one-level-deep tree (nested directories
/// as unexpanded stand-ins) and a candidate file set filtered by size and
/// text decodability.
pub trait RepoHost: Send + Sync {
    /// Fetches metadata, tree, and candidate files for `owner/name`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::HostFetch`] when the underlying host call
    /// fails (not found, rate-limited, transient).
    fn fetch(&self, owner: &str, name: &str) -> FetchFuture<'_>;
}

/// Resolves a repository URL to its `(owner, name)` pair.
///
/// Strips a trailing slash and a trailing `.git` suffix, splits on the
/// host marker, and takes the first two path segments.
///
/// # Errors
///
/// Returns [`AnalyzeError::InvalidIdentifier`] when the URL does not
/// contain the host marker or fewer than two non-empty segments follow it.
pub fn parse_repo_url(url: &str) -> Result<(String, String), AnalyzeError> {
    let trimmed = url.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    if let Some((_, rest)) = trimmed.split_once(HOST_MARKER) {
        let mut segments = rest.split('/');
        if let (Some(owner), Some(name)) = (segments.next(), segments.next()) {
            if !owner.is_empty() && !name.is_empty() {
                return Ok((owner.to_string(), name.to_string()));
            }
        }
    }

    Err(AnalyzeError::InvalidIdentifier(url.to_string()))
}
