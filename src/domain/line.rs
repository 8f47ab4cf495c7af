//! Bus lines ("linhas").

use crate::domain::{LineId, ScheduleWithStop};

/// A bus route identified by a unique code (e.g. "201").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub code: String,
    pub name: String,
}

/// A line with every schedule it serves, each with its stop resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct LineWithSchedules {
    pub line: Line,
    pub schedules: Vec<ScheduleWithStop>,
}
