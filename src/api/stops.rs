use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{StopMapEntry, StopWithCrowding};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CrowdingDto {
    pub nivel: String,
}

#[derive(Debug, Serialize)]
pub struct StopDto {
    pub id: i64,
    pub nome: String,
    pub bairro: String,
    pub lat: f64,
    pub lng: f64,
    /// `null` when the stop has no crowding record.
    pub lotacao: Option<CrowdingDto>,
}

impl From<StopWithCrowding> for StopDto {
    fn from(s: StopWithCrowding) -> Self {
        StopDto {
            id: s.stop.id.as_i64(),
            nome: s.stop.name,
            bairro: s.stop.neighborhood,
            lat: s.stop.lat,
            lng: s.stop.lng,
            lotacao: s.crowding.map(|c| CrowdingDto { nivel: c.level.0 }),
        }
    }
}

/// Map marker. `lotacao` is always present here, defaulting to "media".
#[derive(Debug, Serialize)]
pub struct StopMapDto {
    pub id: i64,
    pub nome: String,
    pub linha_id: i64,
    pub lat: f64,
    pub lng: f64,
    pub lotacao: String,
    pub transito: String,
}

impl From<StopMapEntry> for StopMapDto {
    fn from(e: StopMapEntry) -> Self {
        StopMapDto {
            id: e.stop_id.as_i64(),
            nome: e.name,
            linha_id: e.line_id.as_i64(),
            lat: e.lat,
            lng: e.lng,
            lotacao: e.crowding.0,
            transito: e.traffic_status.0,
        }
    }
}

pub async fn list_stops(State(state): State<AppState>) -> Result<Json<Vec<StopDto>>, AppError> {
    let stops = state.repo.list_stops().await?;
    Ok(Json(stops.into_iter().map(StopDto::from).collect()))
}

pub async fn list_stops_for_map(
    State(state): State<AppState>,
) -> Result<Json<Vec<StopMapDto>>, AppError> {
    let entries = state.repo.list_stops_for_map().await?;
    Ok(Json(entries.into_iter().map(StopMapDto::from).collect()))
}
