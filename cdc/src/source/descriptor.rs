use crate::options::registry::ConnectorFamily;
use crate::schema::table_id::TableId;
use crate::source::physical::PhysicalSchema;
use crate::startup::StartupOptions;
use std::collections::BTreeMap;
use std::fmt;

/// Immutable description of one CDC table source.
///
/// Two descriptors are equal when they describe the same logical source, so
/// every field takes part in the comparison.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub connector: ConnectorFamily,
    pub physical_schema: PhysicalSchema,
    pub port: u16,
    pub hostname: String,
    pub database: String,
    pub table: String,
    pub schema_name: Option<String>,
    pub username: String,
    pub password: String,
    /// Engine properties with the `debezium.` prefix removed.
    pub passthrough_properties: BTreeMap<String, String>,
    pub startup_options: StartupOptions,
}

impl SourceDescriptor {
    /// Identifier used to look up the captured table's schema.
    pub fn table_id(&self) -> TableId {
        TableId::new(
            Some(self.database.as_str()),
            self.schema_name.as_deref(),
            &self.table,
        )
    }
}

impl fmt::Debug for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceDescriptor")
            .field("connector", &self.connector)
            .field("physical_schema", &self.physical_schema)
            .field("port", &self.port)
            .field("hostname", &self.hostname)
            .field("database", &self.database)
            .field("table", &self.table)
            .field("schema_name", &self.schema_name)
            .field("username", &self.username)
            .field("password", &"******")
            .field("passthrough_properties", &self.passthrough_properties)
            .field("startup_options", &self.startup_options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(connector: ConnectorFamily, schema_name: Option<&str>) -> SourceDescriptor {
        SourceDescriptor {
            connector,
            physical_schema: PhysicalSchema::default(),
            port: 3306,
            hostname: "localhost".to_string(),
            database: "inventory".to_string(),
            table: "products".to_string(),
            schema_name: schema_name.map(str::to_string),
            username: "user".to_string(),
            password: "secret".to_string(),
            passthrough_properties: BTreeMap::new(),
            startup_options: StartupOptions::initial(),
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", descriptor(ConnectorFamily::MySQL, None));
        assert!(!debug.contains("secret"));
        assert!(debug.contains("******"));
        assert!(debug.contains("localhost"));
    }

    #[test]
    fn test_table_id() {
        let id = descriptor(ConnectorFamily::MySQL, None).table_id();
        assert_eq!(id, TableId::new(Some("inventory"), None, "products"));

        let id = descriptor(ConnectorFamily::Oracle, Some("DEBEZIUM")).table_id();
        assert_eq!(
            id,
            TableId::new(Some("inventory"), Some("DEBEZIUM"), "products")
        );
    }

    #[test]
    fn test_equality_covers_every_field() {
        let a = descriptor(ConnectorFamily::MySQL, None);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.password = "other".to_string();
        assert_ne!(a, b);

        let mut c = a.clone();
        c.passthrough_properties
            .insert("snapshot.mode".to_string(), "initial".to_string());
        assert_ne!(a, c);
    }
}
