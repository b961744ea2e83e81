//! Context Builder: the bounded text artifact sent to the generative
//! service.

use crate::repo::{RepositoryRecord, README_VARIANTS};
use crate::summary::deps::extract_dependencies;
use crate::summary::tree::render_file_tree;

/// Maximum dependencies listed per ecosystem before the `... and N more`
/// tail.
const MAX_DEPS_LISTED: usize = 20;

/// Maximum README lines included before the truncation marker.
const MAX_README_LINES: usize = 100;

/// Builds the context summary for `record`.
///
/// Concatenates a metadata block, a fenced tree block (omitted entirely
/// when no tree is present), a dependencies block, and a key-files block.
/// Deterministic: identical records produce byte-identical output.
#[must_use]
pub fn build_context_summary(record: &RepositoryRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push("# Repository Information".to_string());
    parts.push(format!("**Name:** {}", record.full_name));
    parts.push(format!(
        "**Description:** {}",
        record.description.as_deref().unwrap_or("No description")
    ));
    parts.push(format!(
        "**Primary Language:** {}",
        record.language.as_deref().unwrap_or("Unknown")
    ));
    parts.push(format!("**Stars:** {}", record.stars));
    parts.push(format!("**License:** {}", record.license.as_deref().unwrap_or("Not specified")));
    if !record.topics.is_empty() {
        parts.push(format!("**Topics:** {}", record.topics.join(", ")));
    }
    parts.push(String::new());

    if let Some(tree) = &record.file_tree {
        parts.push("# File Structure".to_string());
        parts.push("```".to_string());
        parts.push(render_file_tree(tree, ""));
        parts.push("```".to_string());
        parts.push(String::new());
    }

    let dependencies = extract_dependencies(&record.files);
    if !dependencies.is_empty() {
        parts.push("# Dependencies".to_string());
        for (ecosystem, deps) in &dependencies {
            parts.push(format!("## {}", ecosystem.to_uppercase()));
            for dep in deps.iter().take(MAX_DEPS_LISTED) {
                parts.push(format!("- {dep}"));
            }
            if deps.len() > MAX_DEPS_LISTED {
                parts.push(format!("... and {} more", deps.len() - MAX_DEPS_LISTED));
            }
        }
        parts.push(String::new());
    }

    parts.push("# Key Files".to_string());
    for file in &record.files {
        if README_VARIANTS.contains(&file.name.as_str()) {
            parts.push(format!("## {}", file.name));
            parts.push("```".to_string());
            let lines: Vec<&str> = file.content.split('\n').collect();
            parts.push(lines.iter().take(MAX_README_LINES).copied().collect::<Vec<_>>().join("\n"));
            if lines.len() > MAX_README_LINES {
                parts.push("\n... (truncated)".to_string());
            }
            parts.push("```".to_string());
            parts.push(String::new());
        }
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::build_context_summary;
    use crate::repo::{DirEntry, DirNode, FetchedFile, FileEntry, FileTree, RepositoryRecord};

    fn record() -> RepositoryRecord {
        RepositoryRecord {
            name: "widgets".to_string(),
            full_name: "acme/widgets".to_string(),
            description: Some("A widget factory".to_string()),
            language: Some("Rust".to_string()),
            stars: 42,
            default_branch: "main".to_string(),
            size: 128,
            topics: vec![],
            license: None,
            file_tree: None,
            files: vec![],
        }
    }

    fn fetched(name: &str, content: &str) -> FetchedFile {
        FetchedFile {
            name: name.to_string(),
            path: name.to_string(),
            size: content.len() as u64,
            content: content.to_string(),
        }
    }

    #[test]
    fn metadata_uses_explicit_placeholders() {
        let mut record = record();
        record.description = None;
        record.language = None;
        let summary = build_context_summary(&record);
        assert!(summary.contains("**Description:** No description"));
        assert!(summary.contains("**Primary Language:** Unknown"));
        assert!(summary.contains("**License:** Not specified"));
        assert!(!summary.contains("**Topics:**"));
    }

    #[test]
    fn topics_render_comma_separated_when_present() {
        let mut record = record();
        record.topics = vec!["cli".to_string(), "parser".to_string()];
        let summary = build_context_summary(&record);
        assert!(summary.contains("**Topics:** cli, parser"));
    }

    #[test]
    fn tree_block_omitted_without_file_tree() {
        let summary = build_context_summary(&record());
        assert!(!summary.contains("# File Structure"));
    }

    #[test]
    fn tree_block_is_fenced() {
        let mut record = record();
        record.file_tree = Some(FileTree {
            dirs: vec![DirEntry {
                name: "src".to_string(),
                node: DirNode::Unexpanded { path: "src".to_string() },
            }],
            files: vec![FileEntry {
                name: "README.md".to_string(),
                path: "README.md".to_string(),
                size: 1024,
            }],
        });
        let summary = build_context_summary(&record);
        assert!(summary.contains("# File Structure\n```\n├── src/\n└── README.md (1.0 KB)\n```"));
    }

    #[test]
    fn dependency_list_caps_at_twenty_with_tail() {
        let reqs: String = (0..25).map(|i| format!("pkg{i}\n")).collect();
        let mut record = record();
        record.files = vec![fetched("requirements.txt", &reqs)];
        let summary = build_context_summary(&record);

        let bullet_count = summary.lines().filter(|line| line.starts_with("- pkg")).count();
        assert_eq!(bullet_count, 20);
        assert!(summary.contains("... and 5 more"));
        assert!(summary.contains("## PIP"));
    }

    #[test]
    fn readme_caps_at_one_hundred_lines_with_marker() {
        let content: String =
            (0..150).map(|i| format!("line {i}\n")).collect::<String>().trim_end().to_string();
        let mut record = record();
        record.files = vec![fetched("README.md", &content)];
        let summary = build_context_summary(&record);

        assert!(summary.contains("## README.md"));
        assert!(summary.contains("line 99"));
        assert!(!summary.contains("line 100\n"));
        assert!(summary.contains("... (truncated)"));
    }

    #[test]
    fn short_readme_has_no_truncation_marker() {
        let mut record = record();
        record.files = vec![fetched("README.md", "one\ntwo\nthree")];
        let summary = build_context_summary(&record);
        assert!(summary.contains("one\ntwo\nthree"));
        assert!(!summary.contains("... (truncated)"));
    }

    #[test]
    fn output_is_deterministic() {
        let mut record = record();
        record.files = vec![
            fetched("package.json", r#"{"dependencies": {"left-pad": "1.0"}}"#),
            fetched("README.md", "# Widgets"),
        ];
        record.file_tree = Some(FileTree::default());
        assert_eq!(build_context_summary(&record), build_context_summary(&record));
    }
}
