pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, seed_demo_data, Repository, SeedOutcome};
pub use domain::{
    Crowding, CrowdingLevel, Line, LineId, LineWithSchedules, Schedule, ScheduleId,
    ScheduleWithStop, Stop, StopId, StopMapEntry, StopWithCrowding, TrafficStatus,
};
pub use error::AppError;
