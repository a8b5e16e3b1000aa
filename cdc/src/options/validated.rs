use crate::options::declaration::OptionValue;
use crate::options::registry::ConnectorFamily;
use std::collections::BTreeMap;

/// Options that passed validation against a connector's registry.
///
/// Holds every required option, the declared default of every omitted
/// optional option that has one, and nothing undeclared. Passthrough options
/// are kept apart with their prefix already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOptions {
    connector: ConnectorFamily,
    values: BTreeMap<&'static str, OptionValue>,
    passthrough: BTreeMap<String, String>,
}

impl ValidatedOptions {
    pub(crate) fn new(
        connector: ConnectorFamily,
        values: BTreeMap<&'static str, OptionValue>,
        passthrough: BTreeMap<String, String>,
    ) -> Self {
        ValidatedOptions {
            connector,
            values,
            passthrough,
        }
    }

    pub fn connector(&self) -> ConnectorFamily {
        self.connector
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(OptionValue::as_integer)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn passthrough(&self) -> &BTreeMap<String, String> {
        &self.passthrough
    }
}
