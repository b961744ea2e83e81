//! The summarization core: turns a fetched [`crate::repo::RepositoryRecord`]
//! into a bounded, deterministic context artifact plus codebase statistics.
//!
//! Everything here is synchronous and pure: no I/O, no shared state, safe
//! to call from concurrent requests.

pub mod context;
pub mod deps;
pub mod prompt;
pub mod stats;
pub mod tree;

pub use context::build_context_summary;
pub use deps::{extract_dependencies, DependencyMap, ManifestKind};
pub use prompt::build_completion_request;
pub use stats::{calculate_stats, CodebaseStats};
pub use tree::render_file_tree;
