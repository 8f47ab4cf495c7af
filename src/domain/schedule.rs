//! Schedules ("horários"): a departure/arrival pairing of a line and a stop.

use crate::domain::{LineId, ScheduleId, StopId, StopWithCrowding, TrafficStatus};
use chrono::NaiveDateTime;

/// A scheduled trip of one line through one stop.
///
/// Timestamps are wall-clock times without offset. `arrival >= departure` is
/// expected but not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: ScheduleId,
    pub line_id: LineId,
    pub stop_id: StopId,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub traffic_status: TrafficStatus,
}

/// A schedule with its stop (and the stop's crowding) resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleWithStop {
    pub schedule: Schedule,
    pub stop: StopWithCrowding,
}
