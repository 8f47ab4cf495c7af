//! Domain primitives: LineId, StopId, ScheduleId, CrowdingLevel, TrafficStatus.

use serde::{Deserialize, Serialize};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an id from a raw row id.
            pub fn new(id: i64) -> Self {
                $name(id)
            }

            /// Get the underlying row id.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// Primary key of a row in `linhas`.
    LineId
);
row_id!(
    /// Primary key of a row in `paradas`.
    StopId
);
row_id!(
    /// Primary key of a row in `horarios`.
    ScheduleId
);

/// Qualitative occupancy level of a stop ("baixa", "media", "alta", ...).
///
/// Free text: unknown levels are stored and served as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CrowdingLevel(pub String);

impl CrowdingLevel {
    /// Level assumed when a stop has no crowding record.
    pub const DEFAULT: &'static str = "media";

    /// Create a level from any label.
    pub fn new(level: impl Into<String>) -> Self {
        CrowdingLevel(level.into())
    }

    /// Get the label as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CrowdingLevel {
    fn default() -> Self {
        CrowdingLevel::new(Self::DEFAULT)
    }
}

impl std::fmt::Display for CrowdingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traffic condition attached to a schedule ("livre", "moderado", "intenso", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct TrafficStatus(pub String);

impl TrafficStatus {
    /// Status stored when a schedule is inserted without one.
    pub const DEFAULT: &'static str = "moderado";

    /// Create a status from any label.
    pub fn new(status: impl Into<String>) -> Self {
        TrafficStatus(status.into())
    }

    /// Get the label as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TrafficStatus {
    fn default() -> Self {
        TrafficStatus::new(Self::DEFAULT)
    }
}

impl std::fmt::Display for TrafficStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
