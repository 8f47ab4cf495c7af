//! Schedule queries: schedules with their stop, and the per-schedule map view.

use super::{stop_with_crowding, Repository};
use crate::domain::{
    CrowdingLevel, LineId, Schedule, ScheduleId, ScheduleWithStop, Stop, StopId, StopMapEntry,
    TrafficStatus,
};
use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteConnection;
use sqlx::FromRow;

/// Schedule row joined with its stop and the stop's optional crowding record.
#[derive(Debug, FromRow)]
struct ScheduleRow {
    id: ScheduleId,
    linha_id: LineId,
    parada_id: StopId,
    saida: NaiveDateTime,
    chegada: NaiveDateTime,
    status_transito: TrafficStatus,
    parada_nome: String,
    parada_bairro: String,
    parada_lat: f64,
    parada_lng: f64,
    lotacao_id: Option<i64>,
    nivel: Option<CrowdingLevel>,
}

impl From<ScheduleRow> for ScheduleWithStop {
    fn from(row: ScheduleRow) -> Self {
        let stop = Stop {
            id: row.parada_id,
            name: row.parada_nome,
            neighborhood: row.parada_bairro,
            lat: row.parada_lat,
            lng: row.parada_lng,
        };
        ScheduleWithStop {
            schedule: Schedule {
                id: row.id,
                line_id: row.linha_id,
                stop_id: row.parada_id,
                departure: row.saida,
                arrival: row.chegada,
                traffic_status: row.status_transito,
            },
            stop: stop_with_crowding(stop, row.lotacao_id, row.nivel),
        }
    }
}

impl Repository {
    /// List every schedule with its stop (and the stop's crowding) resolved.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_schedules(&self) -> Result<Vec<ScheduleWithStop>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        fetch_schedules(&mut conn).await
    }

    /// List one map marker per schedule.
    ///
    /// Stops without a crowding record are reported at the default level
    /// ("media"), unlike [`Repository::list_stops`] which reports no level.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_stops_for_map(&self) -> Result<Vec<StopMapEntry>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        let schedules = fetch_schedules(&mut conn).await?;
        Ok(schedules.iter().map(StopMapEntry::from).collect())
    }
}

pub(super) async fn fetch_schedules(
    conn: &mut SqliteConnection,
) -> Result<Vec<ScheduleWithStop>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ScheduleRow>(
        r#"
        SELECT h.id, h.linha_id, h.parada_id, h.saida, h.chegada, h.status_transito,
               p.nome AS parada_nome, p.bairro AS parada_bairro,
               p.lat AS parada_lat, p.lng AS parada_lng,
               l.id AS lotacao_id, l.nivel
        FROM horarios h
        JOIN paradas p ON p.id = h.parada_id
        LEFT JOIN lotacoes l ON l.parada_id = p.id
        ORDER BY h.id ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(ScheduleWithStop::from).collect())
}
