use crate::error::ValidationError;
use crate::options::declaration::OptionDeclaration;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Reserved key naming the connector. It selects the registry and is not
/// itself validated against one.
pub const CONNECTOR: &str = "connector";

/// Options under this prefix are forwarded to the change-capture engine.
pub const DEBEZIUM_PREFIX: &str = "debezium.";

pub const HOSTNAME: &str = "hostname";
pub const PORT: &str = "port";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const DATABASE_NAME: &str = "database-name";
pub const TABLE_NAME: &str = "table-name";
pub const SCHEMA_NAME: &str = "schema-name";
pub const SCAN_STARTUP_MODE: &str = "scan.startup.mode";
pub const SCAN_STARTUP_SPECIFIC_OFFSET_FILE: &str = "scan.startup.specific-offset.file";
pub const SCAN_STARTUP_SPECIFIC_OFFSET_POS: &str = "scan.startup.specific-offset.pos";
pub const SCAN_STARTUP_TIMESTAMP_MILLIS: &str = "scan.startup.timestamp-millis";

/// Options that become required once an enumerated option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRequirement {
    pub key: &'static str,
    pub value: &'static str,
    pub requires: &'static [&'static str],
}

/// Static table of the options one connector accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRegistry {
    pub connector: ConnectorFamily,
    pub options: &'static [OptionDeclaration],
    pub requirements: &'static [OptionRequirement],
    pub passthrough_prefix: &'static str,
}

impl OptionRegistry {
    pub fn get(&self, key: &str) -> Option<&OptionDeclaration> {
        self.options.iter().find(|o| o.key == key)
    }

    pub fn required_options(&self) -> impl Iterator<Item = &OptionDeclaration> {
        self.options.iter().filter(|o| o.required)
    }
}

const MYSQL_STARTUP_MODES: &[&str] = &[
    "initial",
    "earliest-offset",
    "latest-offset",
    "specific-offset",
    "timestamp",
];

const ORACLE_STARTUP_MODES: &[&str] = &["initial", "latest-offset"];

const MYSQL_OPTIONS: &[OptionDeclaration] = &[
    OptionDeclaration::string(HOSTNAME)
        .required()
        .description("IP address or hostname of the MySQL database server."),
    OptionDeclaration::integer(PORT, 0, 65535)
        .default_value("3306")
        .description("Integer port number of the MySQL database server."),
    OptionDeclaration::string(USERNAME)
        .required()
        .description("Name of the MySQL user to use when connecting to the server."),
    OptionDeclaration::string(PASSWORD)
        .required()
        .description("Password to use when connecting to the MySQL server."),
    OptionDeclaration::string(DATABASE_NAME)
        .required()
        .description("Database name of the MySQL server to monitor."),
    OptionDeclaration::string(TABLE_NAME)
        .required()
        .description("Table name of the MySQL database to monitor."),
    OptionDeclaration::enumeration(SCAN_STARTUP_MODE, MYSQL_STARTUP_MODES)
        .default_value("initial")
        .description("Optional startup mode for the MySQL CDC consumer."),
    OptionDeclaration::string(SCAN_STARTUP_SPECIFIC_OFFSET_FILE)
        .description("Binlog file name to start from in 'specific-offset' mode."),
    OptionDeclaration::integer(SCAN_STARTUP_SPECIFIC_OFFSET_POS, 0, i64::MAX)
        .description("Binlog position to start from in 'specific-offset' mode."),
    OptionDeclaration::integer(SCAN_STARTUP_TIMESTAMP_MILLIS, 0, i64::MAX)
        .description("Epoch milliseconds to start from in 'timestamp' mode."),
];

const MYSQL_REQUIREMENTS: &[OptionRequirement] = &[
    OptionRequirement {
        key: SCAN_STARTUP_MODE,
        value: "specific-offset",
        requires: &[
            SCAN_STARTUP_SPECIFIC_OFFSET_FILE,
            SCAN_STARTUP_SPECIFIC_OFFSET_POS,
        ],
    },
    OptionRequirement {
        key: SCAN_STARTUP_MODE,
        value: "timestamp",
        requires: &[SCAN_STARTUP_TIMESTAMP_MILLIS],
    },
];

const ORACLE_OPTIONS: &[OptionDeclaration] = &[
    OptionDeclaration::string(HOSTNAME)
        .required()
        .description("IP address or hostname of the Oracle database server."),
    OptionDeclaration::integer(PORT, 0, 65535)
        .default_value("1521")
        .description("Integer port number of the Oracle database server."),
    OptionDeclaration::string(USERNAME)
        .required()
        .description("Name of the Oracle user to use when connecting to the server."),
    OptionDeclaration::string(PASSWORD)
        .required()
        .description("Password to use when connecting to the Oracle server."),
    OptionDeclaration::string(DATABASE_NAME)
        .required()
        .description("Database name of the Oracle server to monitor."),
    OptionDeclaration::string(SCHEMA_NAME)
        .required()
        .description("Schema name of the Oracle database to monitor."),
    OptionDeclaration::string(TABLE_NAME)
        .required()
        .description("Table name of the Oracle database to monitor."),
    OptionDeclaration::enumeration(SCAN_STARTUP_MODE, ORACLE_STARTUP_MODES)
        .default_value("initial")
        .description("Optional startup mode for the Oracle CDC consumer."),
];

static MYSQL_REGISTRY: OptionRegistry = OptionRegistry {
    connector: ConnectorFamily::MySQL,
    options: MYSQL_OPTIONS,
    requirements: MYSQL_REQUIREMENTS,
    passthrough_prefix: DEBEZIUM_PREFIX,
};

static ORACLE_REGISTRY: OptionRegistry = OptionRegistry {
    connector: ConnectorFamily::Oracle,
    options: ORACLE_OPTIONS,
    requirements: &[],
    passthrough_prefix: DEBEZIUM_PREFIX,
};

/// The CDC connectors whose options this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorFamily {
    MySQL,
    Oracle,
}

impl ConnectorFamily {
    pub const ALL: [ConnectorFamily; 2] = [ConnectorFamily::MySQL, ConnectorFamily::Oracle];

    pub fn identifier(&self) -> &'static str {
        match self {
            ConnectorFamily::MySQL => "mysql-cdc",
            ConnectorFamily::Oracle => "oracle-cdc",
        }
    }

    pub fn registry(&self) -> &'static OptionRegistry {
        match self {
            ConnectorFamily::MySQL => &MYSQL_REGISTRY,
            ConnectorFamily::Oracle => &ORACLE_REGISTRY,
        }
    }
}

impl FromStr for ConnectorFamily {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql-cdc" => Ok(ConnectorFamily::MySQL),
            "oracle-cdc" => Ok(ConnectorFamily::Oracle),
            _ => Err(ValidationError::UnknownConnector(
                s.to_string(),
                ConnectorFamily::ALL
                    .iter()
                    .map(|c| c.identifier())
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
        }
    }
}

impl Display for ConnectorFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
