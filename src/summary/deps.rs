//! Dependency extraction from ecosystem manifest files.
//!
//! Parsing is best-effort by contract: malformed input degrades to an
//! empty or partial list and no error ever surfaces from this module.

use crate::repo::FetchedFile;

/// Ecosystem name paired with its extracted dependency names, in
/// manifest-encounter order.
pub type DependencyMap = Vec<(&'static str, Vec<String>)>;

/// Version-constraint operators stripped from requirement lines.
const REQUIREMENT_OPERATORS: &[&str] = &["==", ">=", "<=", "~="];

/// The closed set of recognized manifest formats.
///
/// Selecting a variant per filename (rather than dispatching on filename
/// strings at each parse site) keeps coverage checkable at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// `package.json`: structured JSON manifest.
    Npm,
    /// `requirements.txt`: line-oriented requirement list.
    PipRequirements,
    /// `pyproject.toml`: sectioned key=value manifest.
    Pyproject,
    /// `Cargo.toml`: sectioned key=value manifest.
    Cargo,
    /// `go.mod`: whitespace-field module/version pairs.
    GoMod,
    /// `pom.xml`: recognized but not parsed.
    Maven,
    /// `build.gradle`: recognized but not parsed.
    Gradle,
}

impl ManifestKind {
    /// Looks up the manifest kind for a filename.
    #[must_use]
    pub fn from_filename(name: &str) -> Option<Self> {
        match name {
            "package.json" => Some(Self::Npm),
            "requirements.txt" => Some(Self::PipRequirements),
            "pyproject.toml" => Some(Self::Pyproject),
            "Cargo.toml" => Some(Self::Cargo),
            "go.mod" => Some(Self::GoMod),
            "pom.xml" => Some(Self::Maven),
            "build.gradle" => Some(Self::Gradle),
            _ => None,
        }
    }

    /// The ecosystem key this manifest reports under.
    #[must_use]
    pub fn ecosystem(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::PipRequirements => "pip",
            Self::Pyproject => "python",
            Self::Cargo => "rust",
            Self::GoMod => "go",
            Self::Maven => "maven",
            Self::Gradle => "gradle",
        }
    }

    /// Parses manifest content into dependency names.
    #[must_use]
    pub fn parse(self, content: &str) -> Vec<String> {
        match self {
            Self::Npm => parse_package_json(content),
            Self::PipRequirements => parse_requirements(content),
            Self::Pyproject => parse_sectioned(
                content,
                &["[tool.poetry.dependencies]", "[project.dependencies]"],
                true,
            ),
            Self::Cargo => parse_sectioned(content, &["[dependencies]"], false),
            Self::GoMod => parse_go_mod(content),
            Self::Maven => vec!["See pom.xml for Java dependencies".to_string()],
            Self::Gradle => vec!["See build.gradle for Java dependencies".to_string()],
        }
    }
}

/// Extracts dependencies from every recognized manifest in `files`.
///
/// Ecosystems appear in the order their manifests occur in the input;
/// names within an ecosystem keep file or declared-key order.
#[must_use]
pub fn extract_dependencies(files: &[FetchedFile]) -> DependencyMap {
    let mut map = DependencyMap::new();
    for file in files {
        if let Some(kind) = ManifestKind::from_filename(&file.name) {
            map.push((kind.ecosystem(), kind.parse(&file.content)));
        }
    }
    map
}

/// Structured JSON manifest: `dependencies` keys verbatim,
/// `devDependencies` keys suffixed with `" (dev)"`. Parse failure yields
/// an empty list.
fn parse_package_json(content: &str) -> Vec<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(content) else {
        return Vec::new();
    };

    let mut deps = Vec::new();
    if let Some(map) = value.get("dependencies").and_then(serde_json::Value::as_object) {
        deps.extend(map.keys().cloned());
    }
    if let Some(map) = value.get("devDependencies").and_then(serde_json::Value::as_object) {
        deps.extend(map.keys().map(|name| format!("{name} (dev)")));
    }
    deps
}

/// Line-oriented requirement list: blank and `#` lines skipped, version
/// constraints cut at the earliest operator occurrence.
fn parse_requirements(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let end = REQUIREMENT_OPERATORS
                .iter()
                .copied()
                .filter_map(|op| line.find(op))
                .min()
                .unwrap_or(line.len());
            Some(line[..end].trim().to_string())
        })
        .collect()
}

/// Sectioned key=value manifest: lines after a recognized section header
/// and before the next bracketed header contribute their left-hand side.
///
/// `exclude_python` drops the `python` language-version pseudo-dependency
/// (pyproject variant only).
fn parse_sectioned(content: &str, headers: &[&str], exclude_python: bool) -> Vec<String> {
    let mut deps = Vec::new();
    let mut in_section = false;

    for line in content.split('\n') {
        if headers.iter().any(|header| line.contains(header)) {
            in_section = true;
            continue;
        }
        if in_section {
            if line.starts_with('[') {
                break;
            }
            if let Some((lhs, _)) = line.split_once('=') {
                let dep = lhs.trim().trim_matches('"');
                if !dep.is_empty() && !(exclude_python && dep == "python") {
                    deps.push(dep.to_string());
                }
            }
        }
    }
    deps
}

/// Whitespace-field manifest: `module`/`require` directive lines and `//`
/// comments skipped; the first whitespace token of each remaining
/// `/`-bearing line is the dependency path.
fn parse_go_mod(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty()
                || line.starts_with("module")
                || line.starts_with("require")
                || line.starts_with("//")
                || !line.contains('/')
            {
                return None;
            }
            line.split_whitespace().next().map(ToString::to_string)
        })
        .collect()
}
