use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Name of a startup mode as it appears in `scan.startup.mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum StartupMode {
    Initial,
    EarliestOffset,
    LatestOffset,
    SpecificOffset,
    Timestamp,
}

/// How a CDC source bootstraps: a full snapshot followed by the change log, or
/// reading the change log from some position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum StartupOptions {
    /// Snapshot the captured table, then continue with the change log.
    Initial,
    /// Skip the snapshot and read from the oldest retained change log position.
    EarliestOffset,
    /// Skip the snapshot and read only changes committed after startup.
    LatestOffset,
    /// Skip the snapshot and read from an explicit binlog file and position.
    SpecificOffset { file: String, position: u64 },
    /// Skip the snapshot and read changes committed since a point in time.
    Timestamp { millis: i64 },
}

impl StartupOptions {
    pub fn initial() -> Self {
        StartupOptions::Initial
    }

    pub fn earliest() -> Self {
        StartupOptions::EarliestOffset
    }

    pub fn latest() -> Self {
        StartupOptions::LatestOffset
    }

    pub fn specific_offset(file: impl Into<String>, position: u64) -> Self {
        StartupOptions::SpecificOffset {
            file: file.into(),
            position,
        }
    }

    pub fn timestamp(millis: i64) -> Self {
        StartupOptions::Timestamp { millis }
    }

    pub fn mode(&self) -> StartupMode {
        match self {
            StartupOptions::Initial => StartupMode::Initial,
            StartupOptions::EarliestOffset => StartupMode::EarliestOffset,
            StartupOptions::LatestOffset => StartupMode::LatestOffset,
            StartupOptions::SpecificOffset { .. } => StartupMode::SpecificOffset,
            StartupOptions::Timestamp { .. } => StartupMode::Timestamp,
        }
    }

    /// Whether the source takes a snapshot of existing rows before streaming.
    pub fn is_snapshot(&self) -> bool {
        matches!(self, StartupOptions::Initial)
    }
}

impl Default for StartupOptions {
    fn default() -> Self {
        StartupOptions::Initial
    }
}
