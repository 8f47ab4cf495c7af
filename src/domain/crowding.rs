//! Crowding ("lotação") record of a stop.

use crate::domain::{CrowdingLevel, StopId};

/// One-to-one crowding record owned by a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crowding {
    pub id: i64,
    pub stop_id: StopId,
    pub level: CrowdingLevel,
}
