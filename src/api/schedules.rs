use axum::extract::State;
use axum::Json;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::api::stops::StopDto;
use crate::api::AppState;
use crate::domain::ScheduleWithStop;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct ScheduleDto {
    pub id: i64,
    pub linha_id: i64,
    pub parada: StopDto,
    pub saida: NaiveDateTime,
    pub chegada: NaiveDateTime,
    pub status_transito: String,
}

impl From<ScheduleWithStop> for ScheduleDto {
    fn from(s: ScheduleWithStop) -> Self {
        ScheduleDto {
            id: s.schedule.id.as_i64(),
            linha_id: s.schedule.line_id.as_i64(),
            parada: StopDto::from(s.stop),
            saida: s.schedule.departure,
            chegada: s.schedule.arrival,
            status_transito: s.schedule.traffic_status.0,
        }
    }
}

pub async fn list_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleDto>>, AppError> {
    let schedules = state.repo.list_schedules().await?;
    Ok(Json(schedules.into_iter().map(ScheduleDto::from).collect()))
}
