//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for the read-only transit
//! queries. Nested read models are assembled explicitly from join queries:
//! - `mod.rs` - stops (with optional crowding)
//! - `schedules.rs` - schedules with their stop, and the per-schedule map view
//! - `lines.rs` - lines with their schedules
//!
//! Every public query acquires one pooled connection for its whole
//! fetch-and-assemble sequence. The connection returns to the pool when it is
//! dropped, on success and on error alike.

mod lines;
mod schedules;

use crate::domain::{Crowding, CrowdingLevel, Stop, StopId, StopWithCrowding};
use sqlx::sqlite::{SqliteConnection, SqlitePool};
use sqlx::FromRow;

/// Stop row joined with its optional crowding record.
#[derive(Debug, FromRow)]
struct StopRow {
    id: StopId,
    nome: String,
    bairro: String,
    lat: f64,
    lng: f64,
    lotacao_id: Option<i64>,
    nivel: Option<CrowdingLevel>,
}

/// Builds the read model for a stop from its columns and the LEFT JOINed
/// crowding columns (both `None` when the stop has no crowding record).
fn stop_with_crowding(
    stop: Stop,
    lotacao_id: Option<i64>,
    nivel: Option<CrowdingLevel>,
) -> StopWithCrowding {
    let crowding = lotacao_id.map(|id| Crowding {
        id,
        stop_id: stop.id,
        level: nivel.unwrap_or_default(),
    });
    StopWithCrowding { stop, crowding }
}

impl From<StopRow> for StopWithCrowding {
    fn from(row: StopRow) -> Self {
        let stop = Stop {
            id: row.id,
            name: row.nome,
            neighborhood: row.bairro,
            lat: row.lat,
            lng: row.lng,
        };
        stop_with_crowding(stop, row.lotacao_id, row.nivel)
    }
}

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// List every stop with its crowding record, when present.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_stops(&self) -> Result<Vec<StopWithCrowding>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        fetch_stops(&mut conn).await
    }
}

async fn fetch_stops(conn: &mut SqliteConnection) -> Result<Vec<StopWithCrowding>, sqlx::Error> {
    let rows = sqlx::query_as::<_, StopRow>(
        r#"
        SELECT p.id, p.nome, p.bairro, p.lat, p.lng,
               l.id AS lotacao_id, l.nivel
        FROM paradas p
        LEFT JOIN lotacoes l ON l.parada_id = p.id
        ORDER BY p.id ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(StopWithCrowding::from).collect())
}
