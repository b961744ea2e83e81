//! The analysis pipeline: resolve, fetch, summarize, complete.
//!
//! One linear sequence of pure transformations bracketed by the two
//! network calls (host fetch and completion). The core itself performs no
//! I/O and holds no state across requests.

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::error::AnalyzeError;
use crate::ports::llm::TextSink;
use crate::ports::repo_host::parse_repo_url;
use crate::summary::{build_completion_request, build_context_summary, calculate_stats};
use crate::summary::stats::CodebaseStats;

/// Repository metadata echoed back alongside the narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Primary language label, if known.
    pub language: Option<String>,
    /// Star count.
    pub stars: u64,
    /// Free-text description, if any.
    pub description: Option<String>,
}

/// The outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// `owner/name` of the analyzed repository.
    pub repo_name: String,
    /// Generated narrative.
    pub summary: String,
    /// Aggregate tree statistics.
    pub stats: CodebaseStats,
    /// Echoed repository metadata.
    pub metadata: ReportMetadata,
}

/// Runs the full pipeline for `repo_url` with the user's `prompt`.
///
/// # Errors
///
/// Propagates [`AnalyzeError::InvalidIdentifier`] from URL resolution,
/// [`AnalyzeError::HostFetch`] from the repository host, and
/// [`AnalyzeError::Service`] from the generative call. Dependency-parsing
/// problems never surface; they degrade inside the summary.
pub async fn analyze(
    ctx: &ServiceContext,
    repo_url: &str,
    prompt: &str,
) -> Result<AnalysisReport, AnalyzeError> {
    let (owner, name) = parse_repo_url(repo_url)?;
    let record = ctx.host.fetch(&owner, &name).await?;

    let context = build_context_summary(&record);
    let stats = calculate_stats(record.file_tree.as_ref());
    let request = build_completion_request(&context, prompt);
    let summary = ctx.llm.complete(&request).await?;

    Ok(AnalysisReport {
        repo_name: record.full_name,
        summary,
        stats,
        metadata: ReportMetadata {
            language: record.language,
            stars: record.stars,
            description: record.description,
        },
    })
}

/// Streaming variant of [`analyze`]: incremental narrative chunks go to
/// `sink`, and the assembled report is returned once the stream ends.
///
/// # Errors
///
/// Same conditions as [`analyze`].
pub async fn analyze_streaming<'a>(
    ctx: &'a ServiceContext,
    repo_url: &str,
    prompt: &str,
    sink: TextSink<'a>,
) -> Result<AnalysisReport, AnalyzeError> {
    let (owner, name) = parse_repo_url(repo_url)?;
    let record = ctx.host.fetch(&owner, &name).await?;

    let context = build_context_summary(&record);
    let stats = calculate_stats(record.file_tree.as_ref());
    let request = build_completion_request(&context, prompt);
    let summary = ctx.llm.complete_streaming(&request, sink).await?;

    Ok(AnalysisReport {
        repo_name: record.full_name,
        summary,
        stats,
        metadata: ReportMetadata {
            language: record.language,
            stars: record.stars,
            description: record.description,
        },
    })
}
