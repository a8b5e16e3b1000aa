use thiserror::Error;

/// Raised while turning raw connector options into a validated configuration.
///
/// Every variant names the offending key(s) verbatim so the message can be
/// shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "One or more required options are missing.\n\nMissing required options are:\n\n{}",
        .0.join("\n")
    )]
    MissingRequiredOptions(Vec<String>),

    #[error(
        "Unsupported options found for '{connector}'.\n\nUnsupported options:\n\n{}",
        .keys.join("\n")
    )]
    UnsupportedOptions { connector: String, keys: Vec<String> },

    #[error("{}", invalid_value_message(.key, .value, .supported.as_deref()))]
    InvalidOptionValue {
        key: String,
        value: String,
        /// Legal values in declaration order, set for enumerated options only.
        supported: Option<Vec<String>>,
    },

    #[error("Could not find any connector for identifier '{0}'. Available identifiers are [{1}]")]
    UnknownConnector(String, String),
}

impl ValidationError {
    pub fn invalid_value(key: &str, value: &str) -> Self {
        ValidationError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
            supported: None,
        }
    }

    pub fn invalid_enum_value(key: &str, value: &str, supported: &[&str]) -> Self {
        ValidationError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
            supported: Some(supported.iter().map(|s| s.to_string()).collect()),
        }
    }
}

fn invalid_value_message(key: &str, value: &str, supported: Option<&[String]>) -> String {
    match supported {
        Some(values) => format!(
            "Invalid value for option '{}'. Supported values are [{}], but was: {}",
            key,
            values.join(", "),
            value
        ),
        None => format!("Could not parse value '{}' for key '{}'.", value, key),
    }
}
