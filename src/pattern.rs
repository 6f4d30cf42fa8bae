use crate::config::Config;
use crate::types::{OrganizationPattern, RepositoryLocation};
use heck::{ToSnakeCase, ToUpperCamelCase};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub const REPOSITORY_FILE_SUFFIX: &str = "_repository.rs";

/// Outcome of a pattern detection run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub pattern: OrganizationPattern,
    pub target_dir: PathBuf,
}

/// Decides where a new repository module belongs by looking at where the
/// project already keeps its existing ones. Read-only; detection always
/// succeeds with at least the flat default.
pub struct PathPatternDetector {
    repositories_root: PathBuf,
    source_root: PathBuf,
}

impl PathPatternDetector {
    pub fn new(project_root: &Path, config: &Config) -> Self {
        Self {
            repositories_root: project_root.join(&config.repositories_dir),
            source_root: project_root.join("src"),
        }
    }

    pub fn detect(&self, model_name: &str) -> Detection {
        let model_snake = model_name.to_snake_case();

        let (locations, root) = self.scan();
        if locations.is_empty() {
            return Detection {
                pattern: OrganizationPattern::Flat,
                target_dir: self.repositories_root.clone(),
            };
        }

        let pattern = winning_pattern(&locations);
        debug!(%pattern, candidates = locations.len(), "detected organization pattern");

        Detection {
            target_dir: pattern.target_directory(&root, &model_snake),
            pattern,
        }
    }

    /// Primary conventional directory first; the whole source tree only when
    /// the primary one has nothing to say.
    fn scan(&self) -> (Vec<RepositoryLocation>, PathBuf) {
        let primary = scan_directory(&self.repositories_root);
        if !primary.is_empty() {
            return (primary, self.repositories_root.clone());
        }
        (scan_directory(&self.source_root), self.source_root.clone())
    }
}

/// Collects and classifies every repository module under `root`. A missing
/// directory is an empty result, not an error.
fn scan_directory(root: &Path) -> Vec<RepositoryLocation> {
    if !root.is_dir() {
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| classify_file(root, entry.path()))
        .collect()
}

fn classify_file(root: &Path, path: &Path) -> Option<RepositoryLocation> {
    let file_name = path.file_name()?.to_str()?;
    let model_snake = file_name.strip_suffix(REPOSITORY_FILE_SUFFIX)?;
    if model_snake.is_empty() {
        return None;
    }

    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<&str> = relative
        .parent()
        .map(|parent| parent.iter().filter_map(|s| s.to_str()).collect())
        .unwrap_or_default();

    let pattern = OrganizationPattern::classify(&segments, model_snake)?;
    debug!(path = %path.display(), %pattern, "classified repository module");

    Some(RepositoryLocation {
        path: path.to_path_buf(),
        model_name: model_snake.to_upper_camel_case(),
        pattern,
    })
}

/// Most matches wins; on a tie the more specific pattern does.
fn winning_pattern(locations: &[RepositoryLocation]) -> OrganizationPattern {
    let mut winner = OrganizationPattern::Flat;
    let mut best = 0usize;

    for pattern in OrganizationPattern::PRECEDENCE {
        let count = locations
            .iter()
            .filter(|location| location.pattern == pattern)
            .count();
        if count > best {
            best = count;
            winner = pattern;
        }
    }

    winner
}
