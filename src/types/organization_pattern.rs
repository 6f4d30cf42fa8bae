use crate::naming::pluralize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DOMAINS_SEGMENT: &str = "domains";

/// Directory convention a project uses to organize its repository modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrganizationPattern {
    /// `<root>/<plural_model>/<model>_repository.rs`
    GroupedByModel,
    /// `<root>/domains/<model>/<model>_repository.rs`
    DomainDriven,
    /// `<root>/<module>/<model>_repository.rs` with an arbitrary module name
    ModuleBased,
    /// `<root>/<model>_repository.rs`
    Flat,
}

impl OrganizationPattern {
    /// Tie-breaking order, most specific shape first.
    pub const PRECEDENCE: [Self; 4] = [
        Self::GroupedByModel,
        Self::DomainDriven,
        Self::ModuleBased,
        Self::Flat,
    ];

    /// Classifies a repository file by the directory segments between the
    /// scan root and the file. Matching is structural; module names are
    /// arbitrary, so a lone segment only counts as grouped-by-model when it
    /// is the pluralized model name.
    pub fn classify(segments: &[&str], model_snake: &str) -> Option<Self> {
        match segments {
            [] => Some(Self::Flat),
            [module] => {
                if *module == pluralize(model_snake) {
                    Some(Self::GroupedByModel)
                } else {
                    Some(Self::ModuleBased)
                }
            }
            [first, ..] if *first == DOMAINS_SEGMENT => Some(Self::DomainDriven),
            _ => None,
        }
    }

    /// Where a new module for `model_snake` belongs under this convention.
    pub fn target_directory(&self, root: &Path, model_snake: &str) -> PathBuf {
        match self {
            Self::Flat => root.to_path_buf(),
            Self::GroupedByModel => root.join(pluralize(model_snake)),
            Self::DomainDriven => root.join(DOMAINS_SEGMENT).join(model_snake),
            Self::ModuleBased => root.join(model_snake),
        }
    }
}

impl fmt::Display for OrganizationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GroupedByModel => "grouped-by-model",
            Self::DomainDriven => "domain-driven",
            Self::ModuleBased => "module-based",
            Self::Flat => "flat",
        })
    }
}
