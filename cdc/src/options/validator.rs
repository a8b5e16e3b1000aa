use crate::error::ValidationError;
use crate::options::declaration::OptionValue;
use crate::options::registry::{OptionRegistry, CONNECTOR};
use crate::options::validated::ValidatedOptions;
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Validates raw connector options against `registry`.
///
/// A `connector` key, when present, must name the registry's connector.
/// Missing required options are reported before unsupported ones, and both
/// before any value that fails to parse. Key lists in errors are sorted.
pub fn validate(
    raw: &HashMap<String, String>,
    registry: &OptionRegistry,
) -> Result<ValidatedOptions, ValidationError> {
    if let Some(connector) = raw.get(CONNECTOR) {
        let expected = registry.connector.identifier();
        if connector != expected {
            return Err(ValidationError::invalid_enum_value(
                CONNECTOR,
                connector,
                &[expected],
            ));
        }
    }

    let (declared, passthrough, unsupported) = partition(raw, registry);

    let missing: BTreeSet<String> = registry
        .required_options()
        .filter(|o| !declared.contains_key(o.key))
        .map(|o| o.key.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingRequiredOptions(
            missing.into_iter().collect(),
        ));
    }

    if !unsupported.is_empty() {
        return Err(ValidationError::UnsupportedOptions {
            connector: registry.connector.to_string(),
            keys: unsupported.into_iter().collect(),
        });
    }

    let mut values: BTreeMap<&'static str, OptionValue> = BTreeMap::new();
    for option in registry.options {
        let raw_value = match declared.get(option.key) {
            Some(value) => *value,
            None => match option.default {
                Some(default) => default,
                None => continue,
            },
        };
        values.insert(option.key, option.parse(raw_value)?);
    }

    check_requirements(&values, registry)?;

    debug!(
        "Validated {} options ({} passthrough) for '{}'",
        values.len(),
        passthrough.len(),
        registry.connector
    );

    Ok(ValidatedOptions::new(
        registry.connector,
        values,
        passthrough,
    ))
}

/// Splits raw options into declared options, prefix-stripped passthrough
/// options and unrecognized keys. The reserved `connector` key is checked by
/// `validate` and dropped here.
fn partition<'a>(
    raw: &'a HashMap<String, String>,
    registry: &OptionRegistry,
) -> (
    HashMap<&'a str, &'a str>,
    BTreeMap<String, String>,
    BTreeSet<String>,
) {
    let mut declared = HashMap::new();
    let mut passthrough = BTreeMap::new();
    let mut unsupported = BTreeSet::new();

    for (key, value) in raw {
        if key == CONNECTOR {
            continue;
        }
        if registry.get(key).is_some() {
            declared.insert(key.as_str(), value.as_str());
            continue;
        }
        match key.strip_prefix(registry.passthrough_prefix) {
            Some(stripped) if !stripped.is_empty() => {
                passthrough.insert(stripped.to_string(), value.clone());
            }
            _ => {
                unsupported.insert(key.clone());
            }
        }
    }

    (declared, passthrough, unsupported)
}

fn check_requirements(
    values: &BTreeMap<&'static str, OptionValue>,
    registry: &OptionRegistry,
) -> Result<(), ValidationError> {
    let mut missing = BTreeSet::new();
    for requirement in registry.requirements {
        let triggered = values
            .get(requirement.key)
            .and_then(OptionValue::as_str)
            .map_or(false, |v| v == requirement.value);
        if !triggered {
            continue;
        }
        for key in requirement.requires {
            if !values.contains_key(key) {
                missing.insert(key.to_string());
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredOptions(
            missing.into_iter().collect(),
        ))
    }
}
