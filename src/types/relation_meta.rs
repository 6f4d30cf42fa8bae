#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationKind {
    /// This table owns the foreign key.
    BelongsTo,
    /// Another table's foreign key points back here.
    HasMany,
}

/// A repository class a relation was resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRepository {
    pub class_name: String,           // UpperCamelCase
    pub module_segments: Vec<String>, // crate-relative, snake_case
}

/// A proposed relationship declaration. `target` stays `None` when no
/// existing repository class matched the candidate model; the declaration is
/// still rendered and the host framework resolves it at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationMeta {
    pub kind: RelationKind,
    pub relation_name: String, // snake_case
    pub model_name: String,    // UpperCamelCase candidate
    pub target: Option<ResolvedRepository>,
}
