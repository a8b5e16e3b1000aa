use serde::{Deserialize, Serialize};

/// A physical column as declared by the host catalog.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
}

fn default_nullable() -> bool {
    true
}

impl Column {
    pub fn new(name: &str, data_type: &str, nullable: bool) -> Self {
        Column {
            name: name.to_string(),
            data_type: data_type.to_string(),
            nullable,
        }
    }

    pub fn nullable(name: &str, data_type: &str) -> Self {
        Column::new(name, data_type, true)
    }

    pub fn not_null(name: &str, data_type: &str) -> Self {
        Column::new(name, data_type, false)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueConstraint {
    pub name: String,
    pub columns: Vec<String>,
}

impl UniqueConstraint {
    pub fn primary_key(name: &str, columns: &[&str]) -> Self {
        UniqueConstraint {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Ordered physical columns and the optional primary key of a table source.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhysicalSchema {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub primary_key: Option<UniqueConstraint>,
}

impl PhysicalSchema {
    pub fn new(columns: Vec<Column>, primary_key: Option<UniqueConstraint>) -> Self {
        PhysicalSchema {
            columns,
            primary_key,
        }
    }
}
