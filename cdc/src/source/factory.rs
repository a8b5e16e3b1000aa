use crate::error::ValidationError;
use crate::options::registry::{ConnectorFamily, CONNECTOR};
use crate::options::validator::validate;
use crate::source::builder::build;
use crate::source::descriptor::SourceDescriptor;
use crate::source::physical::PhysicalSchema;
use log::info;
use std::collections::HashMap;
use std::str::FromStr;

/// Creates a table source descriptor from the raw options of a table
/// definition. The `connector` option selects which registry validates the
/// remaining options.
pub fn create_table_source(
    options: &HashMap<String, String>,
    physical_schema: PhysicalSchema,
) -> Result<SourceDescriptor, ValidationError> {
    let identifier = options
        .get(CONNECTOR)
        .ok_or_else(|| ValidationError::MissingRequiredOptions(vec![CONNECTOR.to_string()]))?;
    let connector = ConnectorFamily::from_str(identifier)?;

    let validated = validate(options, connector.registry())?;
    let descriptor = build(&validated, physical_schema);

    info!(
        "Created '{}' table source for {}",
        connector,
        descriptor.table_id()
    );
    Ok(descriptor)
}
