use super::column_meta::ColumnMeta;

#[derive(Clone, Debug)]
pub struct TableMeta {
    pub table_name: String, // snake_case
    pub columns: Vec<ColumnMeta>, // native column order
}

impl TableMeta {
    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|column| column.column_name == name)
    }
}
