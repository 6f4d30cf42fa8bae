use super::organization_pattern::OrganizationPattern;
use std::path::PathBuf;

/// An existing repository module discovered while scanning the host project.
/// Constructed transiently during detection, never persisted.
#[derive(Clone, Debug)]
pub struct RepositoryLocation {
    pub path: PathBuf,
    pub model_name: String, // UpperCamelCase
    pub pattern: OrganizationPattern,
}
