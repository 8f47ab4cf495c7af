//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - Demo data seeding
//! - Repository layer for the read-only queries

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::init_db;
pub use repo::Repository;
pub use seed::{seed_demo_data, seed_demo_data_at, SeedOutcome};
