use crate::error::Error;
use crate::types::{ColumnMeta, TableMeta};
use heck::ToSnakeCase;
use sea_orm_codegen::Column;
use sea_query::{ColumnDef, ColumnSpec};
use sea_schema::sqlite::def::{Schema, TableDef};
use sea_schema::sqlite::discovery::SchemaDiscovery;
use sqlx::{Pool, Sqlite};

/// Snapshot of the live database, taken once per generation run. Plain data,
/// so inference stays synchronous and test-constructible.
#[derive(Clone, Debug, Default)]
pub struct DatabaseSchema {
    pub tables: Vec<TableMeta>,
}

impl DatabaseSchema {
    pub fn table(&self, name: &str) -> Option<&TableMeta> {
        self.tables.iter().find(|table| table.table_name == name)
    }
}

pub async fn get_database_schema(connection: Pool<Sqlite>) -> Result<DatabaseSchema, Error> {
    let schema_discovery = SchemaDiscovery::new(connection);

    let schema: Schema = schema_discovery
        .discover()
        .await
        .map_err(|err| Error::SchemaUnavailable(format!("{:?}", err)))?;

    let tables = schema
        .tables
        .iter()
        .map(|table: &TableDef| {
            let table_create_stmt = table.write();

            let columns: Vec<ColumnMeta> = table_create_stmt
                .get_columns()
                .into_iter()
                .map(|column: &ColumnDef| {
                    let column_name = column.get_column_name();
                    let column_spec: &Vec<ColumnSpec> = column.get_column_spec();
                    let column_info: Column = Column::from(column);

                    let not_null = column_spec
                        .iter()
                        .any(|spec| matches!(spec, ColumnSpec::NotNull));
                    let is_primary_key = column_spec
                        .iter()
                        .any(|spec| matches!(spec, ColumnSpec::PrimaryKey));

                    ColumnMeta {
                        column_name: column_name.to_snake_case(),
                        column_type: column_info.get_rs_type(),
                        not_null,
                        is_primary_key,
                    }
                })
                .collect();

            TableMeta {
                table_name: table.name.to_snake_case(),
                columns,
            }
        })
        .collect();

    Ok(DatabaseSchema { tables })
}
