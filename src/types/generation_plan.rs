use super::column_meta::{ColumnMeta, ColumnRole};
use super::organization_pattern::OrganizationPattern;
use super::relation_meta::RelationMeta;
use std::path::PathBuf;

/// Everything the generator needs to emit one repository module. The plan is
/// fully computed before any file is touched, so a failure during inference
/// never leaves a half-written file behind.
#[derive(Clone, Debug)]
pub struct GenerationPlan {
    pub model_name: String, // UpperCamelCase
    pub table_name: String, // snake_case, plural
    pub pattern: OrganizationPattern,
    pub target_file: PathBuf,
    pub columns: Vec<ColumnMeta>,     // native column order
    pub relations: Vec<RelationMeta>, // belongs-to first
    pub overwrite: bool,
}

impl GenerationPlan {
    /// Columns rendered as plain field declarations: native order, minus the
    /// identity column and foreign keys.
    pub fn plain_fields(&self) -> impl Iterator<Item = &ColumnMeta> {
        self.columns
            .iter()
            .filter(|column| column.role() == ColumnRole::Plain)
    }
}
