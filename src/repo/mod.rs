//! Repository data model shared by the host adapter and the summarizer.
//!
//! Everything here is a plain value constructed fresh per request; nothing
//! is cached or shared across requests.

use serde::{Deserialize, Serialize};

/// Root-level files fetched for summarization, when present in a repository.
///
/// Restricted to README variants, dependency manifests for the supported
/// ecosystems, and common license/build files.
pub const CANDIDATE_FILES: &[&str] = &[
    "README.md",
    "README.rst",
    "README.txt",
    "package.json",
    "requirements.txt",
    "setup.py",
    "pyproject.toml",
    "Cargo.toml",
    "go.mod",
    "pom.xml",
    "build.gradle",
    ".gitignore",
    "LICENSE",
    "Makefile",
    "Dockerfile",
];

/// Filenames treated as the repository README in the key-files block.
pub const README_VARIANTS: &[&str] = &["README.md", "README.rst", "README.txt"];

/// Largest file content the host adapter will fetch, in bytes.
pub const MAX_FILE_BYTES: u64 = 100_000;

/// A file entry in the repository tree (size only, no content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Bare filename.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Declared size in bytes.
    pub size: u64,
}

/// A named directory within a [`FileTree`] level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Bare directory name.
    pub name: String,
    /// Contents, or a stand-in when the level was not expanded.
    pub node: DirNode,
}

/// Contents of a directory entry.
///
/// The host adapter fetches only one level to bound request volume, so
/// nested directories are usually [`DirNode::Unexpanded`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirNode {
    /// A fully listed subtree.
    Expanded(FileTree),
    /// A directory whose listing was deliberately not fetched.
    Unexpanded {
        /// Path relative to the repository root.
        path: String,
    },
}

/// Recursive directory/file structure.
///
/// Entry order within each level is fetch order, not sorted; the renderer
/// and aggregator must preserve it. Names are unique within a level for
/// each of the two kinds independently. The structure is tree-shaped by
/// construction; the host adapter never aliases subtrees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTree {
    /// Directories at this level.
    pub dirs: Vec<DirEntry>,
    /// Files at this level.
    pub files: Vec<FileEntry>,
}

/// A candidate file fetched with its decoded text content.
///
/// Files whose raw content is not valid text are excluded from the set
/// entirely rather than carried with a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedFile {
    /// Bare filename.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Declared size in bytes.
    pub size: u64,
    /// Decoded text content.
    pub content: String,
}

/// Everything the summarizer needs about one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name.
    pub name: String,
    /// `owner/name` identifier.
    pub full_name: String,
    /// Free-text description, if any.
    pub description: Option<String>,
    /// Primary language label, if known.
    pub language: Option<String>,
    /// Star count.
    pub stars: u64,
    /// Default branch name.
    pub default_branch: String,
    /// Declared repository size as reported by the host.
    pub size: u64,
    /// Topic labels, in host order.
    pub topics: Vec<String>,
    /// License name, if declared.
    pub license: Option<String>,
    /// One-level file tree, when the listing succeeded.
    pub file_tree: Option<FileTree>,
    /// Fetched candidate files with content.
    pub files: Vec<FetchedFile>,
}
