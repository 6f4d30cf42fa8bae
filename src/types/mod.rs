pub mod column_meta;
pub mod generation_plan;
pub mod organization_pattern;
pub mod relation_meta;
pub mod repository_location;
pub mod table_meta;

pub use column_meta::{ColumnMeta, ColumnRole};
pub use generation_plan::GenerationPlan;
pub use organization_pattern::OrganizationPattern;
pub use relation_meta::{RelationKind, RelationMeta, ResolvedRepository};
pub use repository_location::RepositoryLocation;
pub use table_meta::TableMeta;
