use crate::error::ValidationError;

/// Expected type of a declared option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    /// Decimal integer within an inclusive range.
    Integer { min: i64, max: i64 },
    /// One of a fixed set of values, kept in declaration order.
    Enum(&'static [&'static str]),
}

/// A parsed option value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Enum(String),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) | OptionValue::Enum(s) => Some(s),
            OptionValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

/// One recognized connector option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDeclaration {
    pub key: &'static str,
    pub kind: OptionKind,
    pub required: bool,
    /// Raw default, parsed like a user-supplied value when the key is omitted.
    pub default: Option<&'static str>,
    pub description: &'static str,
}

impl OptionDeclaration {
    pub const fn string(key: &'static str) -> Self {
        Self::new(key, OptionKind::String)
    }

    pub const fn integer(key: &'static str, min: i64, max: i64) -> Self {
        Self::new(key, OptionKind::Integer { min, max })
    }

    pub const fn enumeration(key: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(key, OptionKind::Enum(values))
    }

    const fn new(key: &'static str, kind: OptionKind) -> Self {
        OptionDeclaration {
            key,
            kind,
            required: false,
            default: None,
            description: "",
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Parses `raw` as this option's declared type. The raw value is never
    /// trimmed or case-folded.
    pub fn parse(&self, raw: &str) -> Result<OptionValue, ValidationError> {
        match self.kind {
            OptionKind::String => Ok(OptionValue::String(raw.to_string())),
            OptionKind::Integer { min, max } => raw
                .parse::<i64>()
                .ok()
                .filter(|v| (min..=max).contains(v))
                .map(OptionValue::Integer)
                .ok_or_else(|| ValidationError::invalid_value(self.key, raw)),
            OptionKind::Enum(values) => {
                if values.contains(&raw) {
                    Ok(OptionValue::Enum(raw.to_string()))
                } else {
                    Err(ValidationError::invalid_enum_value(self.key, raw, values))
                }
            }
        }
    }
}
