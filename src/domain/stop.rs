//! Bus stops ("paradas") and their read models.

use crate::domain::{Crowding, CrowdingLevel, LineId, ScheduleWithStop, StopId, TrafficStatus};

/// A physical bus stop with geographic position.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub neighborhood: String,
    pub lat: f64,
    pub lng: f64,
}

/// A stop together with its crowding record, when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct StopWithCrowding {
    pub stop: Stop,
    pub crowding: Option<Crowding>,
}

impl StopWithCrowding {
    /// Crowding level, or `None` when the stop has no crowding record.
    pub fn level(&self) -> Option<&CrowdingLevel> {
        self.crowding.as_ref().map(|c| &c.level)
    }
}

/// Flattened map marker: one entry per schedule, positioned at its stop.
///
/// A stop served by several schedules yields several entries.
#[derive(Debug, Clone, PartialEq)]
pub struct StopMapEntry {
    pub stop_id: StopId,
    pub name: String,
    pub line_id: LineId,
    pub lat: f64,
    pub lng: f64,
    pub crowding: CrowdingLevel,
    pub traffic_status: TrafficStatus,
}

impl From<&ScheduleWithStop> for StopMapEntry {
    fn from(schedule: &ScheduleWithStop) -> Self {
        let stop = &schedule.stop.stop;
        StopMapEntry {
            stop_id: stop.id,
            name: stop.name.clone(),
            line_id: schedule.schedule.line_id,
            lat: stop.lat,
            lng: stop.lng,
            crowding: schedule.stop.level().cloned().unwrap_or_default(),
            traffic_status: schedule.schedule.traffic_status.clone(),
        }
    }
}
