use crate::schema::table_id::TableId;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

impl TableColumn {
    pub fn new(name: &str, data_type: &str, nullable: bool) -> Self {
        TableColumn {
            name: name.to_string(),
            data_type: data_type.to_string(),
            nullable,
        }
    }
}

/// Structural schema of one table: its columns in definition order and its
/// primary-key columns in key order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub id: TableId,
    pub columns: Vec<TableColumn>,
    pub primary_key: Vec<String>,
}

impl TableSchema {
    pub fn new(id: TableId, columns: Vec<TableColumn>, primary_key: Vec<String>) -> Self {
        TableSchema {
            id,
            columns,
            primary_key,
        }
    }

    pub fn column(&self, name: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut TableColumn> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn is_primary_key(&self, name: &str) -> bool {
        self.primary_key.iter().any(|k| k == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableChangeKind {
    Create,
}

/// One structural change read from a DDL statement.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TableChange {
    pub kind: TableChangeKind,
    pub id: TableId,
    pub schema: TableSchema,
}

impl TableChange {
    pub fn create(schema: TableSchema) -> Self {
        TableChange {
            kind: TableChangeKind::Create,
            id: schema.id.clone(),
            schema,
        }
    }
}
