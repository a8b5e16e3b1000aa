pub mod cache;
pub mod connection;
pub mod ddl;
pub mod resolver;
pub mod table;
pub mod table_id;

pub use cache::TableSchemaCache;
pub use connection::{IntrospectionConnection, MySqlConnection};
pub use ddl::{DdlParser, SqlDdlParser};
pub use resolver::SchemaResolver;
pub use table::{TableChange, TableChangeKind, TableColumn, TableSchema};
pub use table_id::TableId;
