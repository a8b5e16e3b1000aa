use crate::error::BoxError;
use crate::schema::table_id::TableId;
use std::time::Duration;
use thiserror::Error;

/// Raised by schema resolution. None of these leave an entry behind in the
/// schema cache.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Can't obtain schema for table {table} by running {statement}")]
    SchemaNotFound { table: TableId, statement: String },

    #[error("Failed to read schema for table {table} by running {statement}")]
    SchemaQueryFailed {
        table: TableId,
        statement: String,
        #[source]
        source: BoxError,
    },

    #[error("Timed out after {timeout:?} reading schema for table {table} by running {statement}")]
    SchemaQueryTimedOut {
        table: TableId,
        statement: String,
        timeout: Duration,
    },

    #[error("Failed to parse DDL of table {table} returned by {statement}")]
    DdlParseFailed {
        table: TableId,
        statement: String,
        #[source]
        source: BoxError,
    },
}

impl SchemaError {
    pub fn table(&self) -> &TableId {
        match self {
            SchemaError::SchemaNotFound { table, .. }
            | SchemaError::SchemaQueryFailed { table, .. }
            | SchemaError::SchemaQueryTimedOut { table, .. }
            | SchemaError::DdlParseFailed { table, .. } => table,
        }
    }
}
