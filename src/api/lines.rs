use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::schedules::ScheduleDto;
use crate::api::AppState;
use crate::domain::LineWithSchedules;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct LineDto {
    pub id: i64,
    pub codigo: String,
    pub nome: String,
    pub horarios: Vec<ScheduleDto>,
}

impl From<LineWithSchedules> for LineDto {
    fn from(l: LineWithSchedules) -> Self {
        LineDto {
            id: l.line.id.as_i64(),
            codigo: l.line.code,
            nome: l.line.name,
            horarios: l.schedules.into_iter().map(ScheduleDto::from).collect(),
        }
    }
}

pub async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineDto>>, AppError> {
    let lines = state.repo.list_lines().await?;
    Ok(Json(lines.into_iter().map(LineDto::from).collect()))
}
