//! Indented, connector-drawn rendering of a [`FileTree`].

use crate::repo::{DirNode, FileTree};

/// Renders `tree` as a multi-line text diagram.
///
/// Directories come first in stored order, then files in stored order; the
/// last entry of the merged sequence gets a corner connector, every other
/// entry a tee. Directories get a trailing `/` and their subtree indented
/// beneath them; files get their size in KB to one decimal place. Empty
/// subtrees and unexpanded directories render nothing beneath their own
/// line. Pure function of the tree value.
#[must_use]
pub fn render_file_tree(tree: &FileTree, prefix: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let total = tree.dirs.len() + tree.files.len();

    for (idx, dir) in tree.dirs.iter().enumerate() {
        let is_last = idx + 1 == total;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{}/", dir.name));

        if let DirNode::Expanded(subtree) = &dir.node {
            let extension = if is_last { "    " } else { "│   " };
            let rendered = render_file_tree(subtree, &format!("{prefix}{extension}"));
            if !rendered.is_empty() {
                lines.push(rendered);
            }
        }
    }

    for (offset, file) in tree.files.iter().enumerate() {
        let is_last = tree.dirs.len() + offset + 1 == total;
        let connector = if is_last { "└── " } else { "├── " };
        let size_kb = file.size as f64 / 1024.0;
        lines.push(format!("{prefix}{connector}{} ({size_kb:.1} KB)", file.name));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_file_tree;
    use crate::repo::{DirEntry, DirNode, FileEntry, FileTree};

    fn file(name: &str, size: u64) -> FileEntry {
        FileEntry { name: name.to_string(), path: name.to_string(), size }
    }

    #[test]
    fn empty_tree_renders_empty_string() {
        assert_eq!(render_file_tree(&FileTree::default(), ""), "");
    }

    #[test]
    fn directory_with_files_and_empty_subdir_uses_tee_and_corner() {
        let tree = FileTree {
            dirs: vec![DirEntry {
                name: "src".to_string(),
                node: DirNode::Expanded(FileTree {
                    dirs: vec![DirEntry {
                        name: "empty".to_string(),
                        node: DirNode::Expanded(FileTree::default()),
                    }],
                    files: vec![file("main.rs", 2048), file("lib.rs", 512)],
                }),
            }],
            files: vec![],
        };

        let rendered = render_file_tree(&tree, "");
        let expected = "└── src/\n\
                        \u{20}   ├── empty/\n\
                        \u{20}   ├── main.rs (2.0 KB)\n\
                        \u{20}   └── lib.rs (0.5 KB)";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn non_last_directory_extends_indent_with_bar() {
        let tree = FileTree {
            dirs: vec![DirEntry {
                name: "docs".to_string(),
                node: DirNode::Expanded(FileTree {
                    dirs: vec![],
                    files: vec![file("guide.md", 1024)],
                }),
            }],
            files: vec![file("README.md", 3072)],
        };

        let rendered = render_file_tree(&tree, "");
        assert_eq!(rendered, "├── docs/\n│   └── guide.md (1.0 KB)\n└── README.md (3.0 KB)");
    }

    #[test]
    fn unexpanded_directory_renders_only_its_own_line() {
        let tree = FileTree {
            dirs: vec![DirEntry {
                name: "vendor".to_string(),
                node: DirNode::Unexpanded { path: "vendor".to_string() },
            }],
            files: vec![],
        };
        assert_eq!(render_file_tree(&tree, ""), "└── vendor/");
    }

    #[test]
    fn preserves_fetch_order_within_a_level() {
        let tree = FileTree {
            dirs: vec![],
            files: vec![file("zeta.rs", 100), file("alpha.rs", 100)],
        };
        let rendered = render_file_tree(&tree, "");
        let zeta = rendered.find("zeta.rs").expect("zeta present");
        let alpha = rendered.find("alpha.rs").expect("alpha present");
        assert!(zeta < alpha);
    }
}
