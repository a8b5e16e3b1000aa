use crate::error::SchemaError;
use crate::schema::connection::IntrospectionConnection;
use crate::schema::ddl::{DdlParser, SqlDdlParser};
use crate::schema::table::TableSchema;
use crate::schema::table_id::TableId;
use log::{debug, warn};
use std::sync::Arc;

/// Reads a table's schema from the source database by running
/// `SHOW CREATE TABLE` and parsing the returned DDL.
///
/// The statement is MySQL's. Unqualified names in the returned DDL take the
/// catalog and schema of the requested id, so schema-qualified ids resolve as
/// long as the connection answers `SHOW CREATE TABLE` for them.
#[derive(Clone)]
pub struct SchemaResolver {
    connection: Arc<dyn IntrospectionConnection>,
    parser: Arc<dyn DdlParser>,
}

impl SchemaResolver {
    pub fn new(connection: Arc<dyn IntrospectionConnection>) -> Self {
        Self::with_parser(connection, Arc::new(SqlDdlParser))
    }

    pub fn with_parser(
        connection: Arc<dyn IntrospectionConnection>,
        parser: Arc<dyn DdlParser>,
    ) -> Self {
        SchemaResolver { connection, parser }
    }

    pub fn statement(table: &TableId) -> String {
        format!("SHOW CREATE TABLE {}", table.quoted())
    }

    /// Issues one introspection statement for `table` and returns the
    /// schema of the change record matching it. When the parser yields
    /// several matching records the last one wins.
    pub async fn resolve(&self, table: &TableId) -> Result<TableSchema, SchemaError> {
        let statement = Self::statement(table);
        debug!("resolve - Statement: {}", statement);

        let rows = match self.connection.query(&statement).await {
            Ok(rows) => rows,
            Err(source) => {
                return Err(SchemaError::SchemaQueryFailed {
                    table: table.clone(),
                    statement,
                    source,
                })
            }
        };

        // Second column of the first row holds the DDL.
        let ddl = rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().nth(1))
            .flatten();
        let ddl = match ddl {
            Some(ddl) => ddl,
            None => {
                return Err(SchemaError::SchemaNotFound {
                    table: table.clone(),
                    statement,
                })
            }
        };

        let changes = match self.parser.parse(
            &ddl,
            table.catalog.as_deref(),
            table.schema.as_deref(),
        ) {
            Ok(changes) => changes,
            Err(source) => {
                return Err(SchemaError::DdlParseFailed {
                    table: table.clone(),
                    statement,
                    source,
                })
            }
        };

        let mut matches = changes.into_iter().filter(|change| &change.id == table);
        let mut change = matches.next();
        let mut discarded = 0;
        for later in matches {
            discarded += 1;
            change = Some(later);
        }
        if discarded > 0 {
            warn!(
                "{} produced {} change records for {}, keeping the last one",
                statement,
                discarded + 1,
                table
            );
        }

        match change {
            Some(change) => Ok(change.schema),
            None => Err(SchemaError::SchemaNotFound {
                table: table.clone(),
                statement,
            }),
        }
    }
}
