//! Domain types for the MoveBrasil transit API.
//!
//! This module provides:
//! - Id newtypes for lines, stops and schedules
//! - Free-text labels with their storage defaults (crowding level, traffic status)
//! - Stored entities and the assembled read models served by the API

pub mod crowding;
pub mod line;
pub mod primitives;
pub mod schedule;
pub mod stop;

pub use crowding::Crowding;
pub use line::{Line, LineWithSchedules};
pub use primitives::{CrowdingLevel, LineId, ScheduleId, StopId, TrafficStatus};
pub use schedule::{Schedule, ScheduleWithStop};
pub use stop::{Stop, StopMapEntry, StopWithCrowding};
