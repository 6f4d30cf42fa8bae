use proc_macro2::TokenStream;

/// Semantic role a column plays in the generated repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRole {
    /// The identity column. Emitted once through `Field::id()`, never as a
    /// plain field.
    Primary,
    /// A `<token>_id` reference column, surfaced as a belongs-to relation
    /// instead of a field.
    ForeignKey,
    Plain,
}

#[derive(Clone, Debug)]
pub struct ColumnMeta {
    pub column_name: String, // snake_case
    pub column_type: TokenStream,
    pub not_null: bool,
    pub is_primary_key: bool,
}

impl ColumnMeta {
    pub fn role(&self) -> ColumnRole {
        if self.is_primary_key || self.column_name == "id" {
            return ColumnRole::Primary;
        }
        if self.foreign_key_token().is_some() {
            return ColumnRole::ForeignKey;
        }
        ColumnRole::Plain
    }

    /// The `<token>` of a `<token>_id` column name. `id` itself and the
    /// degenerate `id_id`/`_id` shapes do not count.
    pub fn foreign_key_token(&self) -> Option<&str> {
        let token = self.column_name.strip_suffix("_id")?;
        if token.is_empty() || token == "id" {
            return None;
        }
        Some(token)
    }
}
