use crate::config::Config;
use crate::pattern::REPOSITORY_FILE_SUFFIX;
use crate::types::ResolvedRepository;
use heck::ToSnakeCase;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered list of conventional locations probed when a relation's candidate
/// model is matched against existing repository classes. A plain existence
/// check, first hit wins.
pub struct RepositoryResolver {
    probes: Vec<Probe>,
}

struct Probe {
    directory: PathBuf,
    module_segments: Vec<String>,
}

impl RepositoryResolver {
    pub fn conventional(project_root: &Path, config: &Config) -> Self {
        let probes = [&config.repositories_dir, &config.secondary_repositories_dir]
            .into_iter()
            .map(|dir| Probe {
                directory: project_root.join(dir),
                module_segments: module_segments(dir),
            })
            .collect();

        Self { probes }
    }

    /// Resolves `model_name` to an existing `<model>_repository.rs`, or
    /// `None` — the relation is then emitted without an explicit target.
    pub fn resolve(&self, model_name: &str) -> Option<ResolvedRepository> {
        let model_snake = model_name.to_snake_case();
        let file_name = format!("{}{}", model_snake, REPOSITORY_FILE_SUFFIX);

        self.probes.iter().find_map(|probe| {
            let candidate = probe.directory.join(&file_name);
            if !candidate.exists() {
                return None;
            }

            debug!(path = %candidate.display(), "resolved related repository");

            let mut module_segments = probe.module_segments.clone();
            module_segments.push(format!("{}_repository", model_snake));

            Some(ResolvedRepository {
                class_name: format!("{}Repository", model_name),
                module_segments,
            })
        })
    }
}

/// `src/api/repositories` -> `["api", "repositories"]`: the crate-relative
/// module path of a probe directory.
fn module_segments(dir: &str) -> Vec<String> {
    Path::new(dir)
        .iter()
        .filter_map(|segment| segment.to_str())
        .filter(|segment| *segment != "src")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn the_primary_location_is_probed_first() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/repositories/user_repository.rs");
        touch(dir.path(), "src/api/repositories/user_repository.rs");

        let resolver = RepositoryResolver::conventional(dir.path(), &Config::default());
        let resolved = resolver.resolve("User").unwrap();

        assert_eq!(resolved.class_name, "UserRepository");
        assert_eq!(
            resolved.module_segments,
            vec!["repositories".to_string(), "user_repository".to_string()]
        );
    }

    #[test]
    fn the_secondary_location_is_probed_when_the_primary_misses() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/api/repositories/user_repository.rs");

        let resolver = RepositoryResolver::conventional(dir.path(), &Config::default());
        let resolved = resolver.resolve("User").unwrap();

        assert_eq!(
            resolved.module_segments,
            vec![
                "api".to_string(),
                "repositories".to_string(),
                "user_repository".to_string()
            ]
        );
    }

    #[test]
    fn unknown_models_stay_unresolved() {
        let dir = tempdir().unwrap();

        let resolver = RepositoryResolver::conventional(dir.path(), &Config::default());

        assert_eq!(resolver.resolve("Ghost"), None);
    }
}
