//! Options validation and schema resolution for CDC table sources.
//!
//! [`source::create_table_source`] turns the raw key/value options of a table
//! definition into an immutable [`source::SourceDescriptor`].
//! [`schema::TableSchemaCache`] resolves each captured table's structural
//! schema on first use and keeps it for the lifetime of the cache.

pub mod error;
pub mod options;
pub mod schema;
pub mod source;
pub mod startup;

pub use error::{CdcError, CdcResult, SchemaError, ValidationError};
pub use options::{validate, ConnectorFamily, ValidatedOptions};
pub use schema::{SchemaResolver, TableId, TableSchema, TableSchemaCache};
pub use source::{build, create_table_source, PhysicalSchema, SourceDescriptor};
pub use startup::{StartupMode, StartupOptions};
