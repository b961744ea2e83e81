//! Aggregate counts over a [`FileTree`].

use serde::{Deserialize, Serialize};

use crate::repo::{DirNode, FileTree};

/// Aggregate statistics derived purely from the file tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodebaseStats {
    /// Total number of files across all expanded levels.
    pub total_files: u64,
    /// Total number of directories across all expanded levels.
    pub total_dirs: u64,
    /// Cumulative declared file size in KB, rounded to 2 decimals.
    pub total_size_kb: f64,
}

/// Computes [`CodebaseStats`] for an optional tree.
///
/// A missing tree yields all-zero stats. The byte sum is converted to KB
/// only at this outermost call.
#[must_use]
pub fn calculate_stats(tree: Option<&FileTree>) -> CodebaseStats {
    match tree {
        Some(tree) => {
            let (total_files, total_dirs, size_bytes) = count_tree(tree);
            CodebaseStats {
                total_files,
                total_dirs,
                total_size_kb: (size_bytes as f64 / 1024.0 * 100.0).round() / 100.0,
            }
        }
        None => CodebaseStats::default(),
    }
}

/// Post-order walk returning `(file_count, dir_count, size_bytes)`.
///
/// Unexpanded directories count as one directory and contribute nothing
/// else. Terminates on any finite tree; the structure is tree-shaped by
/// construction.
#[must_use]
pub fn count_tree(tree: &FileTree) -> (u64, u64, u64) {
    let mut files = tree.files.len() as u64;
    let mut dirs = tree.dirs.len() as u64;
    let mut size: u64 = tree.files.iter().map(|f| f.size).sum();

    for dir in &tree.dirs {
        if let DirNode::Expanded(subtree) = &dir.node {
            let (sub_files, sub_dirs, sub_size) = count_tree(subtree);
            files += sub_files;
            dirs += sub_dirs;
            size += sub_size;
        }
    }

    (files, dirs, size)
}

#[cfg(test)]
mod tests {
    use super::{calculate_stats, count_tree};
    use crate::repo::{DirEntry, DirNode, FileEntry, FileTree};

    fn file(name: &str, size: u64) -> FileEntry {
        FileEntry { name: name.to_string(), path: name.to_string(), size }
    }

    #[test]
    fn counts_nested_files_and_dirs() {
        let tree = FileTree {
            dirs: vec![DirEntry {
                name: "src".to_string(),
                node: DirNode::Expanded(FileTree {
                    dirs: vec![],
                    files: vec![file("lib.rs", 1024)],
                }),
            }],
            files: vec![file("README.md", 2048)],
        };

        assert_eq!(count_tree(&tree), (2, 1, 3072));
        let stats = calculate_stats(Some(&tree));
        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.total_dirs, 1);
        assert!((stats.total_size_kb - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unexpanded_directories_count_but_contribute_no_files() {
        let tree = FileTree {
            dirs: vec![DirEntry {
                name: "vendor".to_string(),
                node: DirNode::Unexpanded { path: "vendor".to_string() },
            }],
            files: vec![],
        };
        assert_eq!(count_tree(&tree), (0, 1, 0));
    }

    #[test]
    fn missing_tree_yields_zero_stats() {
        let stats = calculate_stats(None);
        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.total_dirs, 0);
        assert!(stats.total_size_kb.abs() < f64::EPSILON);
    }

    #[test]
    fn size_rounds_to_two_decimals() {
        let tree = FileTree { dirs: vec![], files: vec![file("a", 1000)] };
        let stats = calculate_stats(Some(&tree));
        assert!((stats.total_size_kb - 0.98).abs() < f64::EPSILON);
    }
}
