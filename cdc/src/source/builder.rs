use crate::options::registry::{
    DATABASE_NAME, HOSTNAME, PASSWORD, PORT, SCAN_STARTUP_MODE, SCAN_STARTUP_SPECIFIC_OFFSET_FILE,
    SCAN_STARTUP_SPECIFIC_OFFSET_POS, SCAN_STARTUP_TIMESTAMP_MILLIS, SCHEMA_NAME, TABLE_NAME,
    USERNAME,
};
use crate::options::validated::ValidatedOptions;
use crate::source::descriptor::SourceDescriptor;
use crate::source::physical::PhysicalSchema;
use crate::startup::{StartupMode, StartupOptions};
use std::str::FromStr;

/// Builds the source descriptor from validated options. Pure and
/// deterministic: equal inputs give equal descriptors.
pub fn build(options: &ValidatedOptions, physical_schema: PhysicalSchema) -> SourceDescriptor {
    SourceDescriptor {
        connector: options.connector(),
        physical_schema,
        // Range-checked against 0..=65535 during validation.
        port: options.get_integer(PORT).unwrap_or_default() as u16,
        hostname: string(options, HOSTNAME),
        database: string(options, DATABASE_NAME),
        table: string(options, TABLE_NAME),
        schema_name: options.get_string(SCHEMA_NAME).map(str::to_string),
        username: string(options, USERNAME),
        password: string(options, PASSWORD),
        passthrough_properties: options.passthrough().clone(),
        startup_options: startup_options(options),
    }
}

fn string(options: &ValidatedOptions, key: &str) -> String {
    options.get_string(key).unwrap_or_default().to_string()
}

fn startup_options(options: &ValidatedOptions) -> StartupOptions {
    let mode = options
        .get_string(SCAN_STARTUP_MODE)
        .and_then(|m| StartupMode::from_str(m).ok())
        .unwrap_or(StartupMode::Initial);

    match mode {
        StartupMode::Initial => StartupOptions::initial(),
        StartupMode::EarliestOffset => StartupOptions::earliest(),
        StartupMode::LatestOffset => StartupOptions::latest(),
        StartupMode::SpecificOffset => StartupOptions::specific_offset(
            string(options, SCAN_STARTUP_SPECIFIC_OFFSET_FILE),
            options
                .get_integer(SCAN_STARTUP_SPECIFIC_OFFSET_POS)
                .unwrap_or_default() as u64,
        ),
        StartupMode::Timestamp => StartupOptions::timestamp(
            options
                .get_integer(SCAN_STARTUP_TIMESTAMP_MILLIS)
                .unwrap_or_default(),
        ),
    }
}
