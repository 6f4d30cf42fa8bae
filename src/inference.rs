use crate::database_schema::DatabaseSchema;
use crate::naming::singularize;
use crate::resolver::RepositoryResolver;
use crate::types::{ColumnMeta, RelationKind, RelationMeta};
use heck::ToUpperCamelCase;
use tracing::debug;

/// Field and relationship declarations derived for one table.
#[derive(Clone, Debug, Default)]
pub struct Inference {
    pub columns: Vec<ColumnMeta>, // native column order
    pub relations: Vec<RelationMeta>, // belongs-to first, discovery order
}

/// Derives declarations for `table_name` from the schema snapshot: this
/// table's foreign keys become belongs-to relations, and sibling tables
/// carrying a `<singular>_id` reference back become has-many relations. A
/// table missing from the snapshot (not yet migrated) behaves like a table
/// with zero columns.
pub fn infer(
    table_name: &str,
    schema: &DatabaseSchema,
    resolver: &RepositoryResolver,
) -> Inference {
    let columns: Vec<ColumnMeta> = schema
        .table(table_name)
        .map(|table| table.columns.clone())
        .unwrap_or_default();

    let mut relations: Vec<RelationMeta> = columns
        .iter()
        .filter_map(|column| column.foreign_key_token())
        .map(|token| {
            let model_name = singularize(token).to_upper_camel_case();
            RelationMeta {
                kind: RelationKind::BelongsTo,
                relation_name: token.to_string(),
                target: resolver.resolve(&model_name),
                model_name,
            }
        })
        .collect();

    let reverse_column = format!("{}_id", singularize(table_name));
    let reverse = schema
        .tables
        .iter()
        .filter(|table| table.table_name != table_name)
        .filter(|table| table.column(&reverse_column).is_some())
        .map(|table| {
            let model_name = singularize(&table.table_name).to_upper_camel_case();
            RelationMeta {
                kind: RelationKind::HasMany,
                relation_name: table.table_name.clone(),
                target: resolver.resolve(&model_name),
                model_name,
            }
        });
    relations.extend(reverse);

    for relation in &relations {
        debug!(
            kind = ?relation.kind,
            name = %relation.relation_name,
            resolved = relation.target.is_some(),
            "inferred relation"
        );
    }

    Inference { columns, relations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::{ColumnRole, TableMeta};
    use pretty_assertions::assert_eq;
    use quote::quote;
    use tempfile::{tempdir, TempDir};

    fn column(name: &str) -> ColumnMeta {
        ColumnMeta {
            column_name: name.into(),
            column_type: quote! { String },
            not_null: true,
            is_primary_key: name == "id",
        }
    }

    fn schema() -> DatabaseSchema {
        DatabaseSchema {
            tables: vec![
                TableMeta {
                    table_name: "posts".into(),
                    columns: vec![column("id"), column("title"), column("user_id")],
                },
                TableMeta {
                    table_name: "comments".into(),
                    columns: vec![column("id"), column("body"), column("post_id")],
                },
            ],
        }
    }

    fn resolver() -> (TempDir, RepositoryResolver) {
        let dir = tempdir().unwrap();
        let resolver = RepositoryResolver::conventional(dir.path(), &Config::default());
        (dir, resolver)
    }

    #[test]
    fn foreign_keys_become_belongs_to_and_never_plain_fields() {
        let (_dir, resolver) = resolver();

        let inference = infer("comments", &schema(), &resolver);

        assert_eq!(
            inference.relations,
            vec![RelationMeta {
                kind: RelationKind::BelongsTo,
                relation_name: "post".into(),
                model_name: "Post".into(),
                target: None,
            }]
        );

        let plain: Vec<&str> = inference
            .columns
            .iter()
            .filter(|column| column.role() == ColumnRole::Plain)
            .map(|column| column.column_name.as_str())
            .collect();
        assert_eq!(plain, vec!["body"]);
    }

    #[test]
    fn sibling_references_become_has_many() {
        let (_dir, resolver) = resolver();

        let inference = infer("posts", &schema(), &resolver);

        assert_eq!(
            inference.relations,
            vec![
                RelationMeta {
                    kind: RelationKind::BelongsTo,
                    relation_name: "user".into(),
                    model_name: "User".into(),
                    target: None,
                },
                RelationMeta {
                    kind: RelationKind::HasMany,
                    relation_name: "comments".into(),
                    model_name: "Comment".into(),
                    target: None,
                },
            ]
        );
    }

    #[test]
    fn the_id_column_is_neither_a_field_nor_a_relation() {
        let (_dir, resolver) = resolver();

        let inference = infer("posts", &schema(), &resolver);

        assert!(inference
            .columns
            .iter()
            .all(|column| column.column_name != "id"
                || column.role() == ColumnRole::Primary));
        assert!(inference
            .relations
            .iter()
            .all(|relation| relation.relation_name != "id"));
    }

    #[test]
    fn a_table_absent_from_the_snapshot_yields_empty_columns() {
        let (_dir, resolver) = resolver();

        let inference = infer("tags", &schema(), &resolver);

        assert!(inference.columns.is_empty());
        assert!(inference.relations.is_empty());
    }

    #[test]
    fn related_models_resolve_against_existing_repository_files() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/repositories")).unwrap();
        std::fs::write(dir.path().join("src/repositories/user_repository.rs"), "").unwrap();
        let resolver = RepositoryResolver::conventional(dir.path(), &Config::default());

        let inference = infer("posts", &schema(), &resolver);

        let user = &inference.relations[0];
        assert_eq!(user.relation_name, "user");
        assert_eq!(
            user.target.as_ref().unwrap().class_name,
            "UserRepository"
        );
    }
}
