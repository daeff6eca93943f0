use axum::{
    extract::{Path, State},
    Json,
};
use ipgeo_rs::GeolocationRecord;
use serde::Serialize;

use crate::domain::errors::AppError;

use super::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct CurrentIpResponse {
    pub ip: String,
}

pub async fn current_ip_handler(
    State(state): State<AppState>,
) -> Result<Json<CurrentIpResponse>, AppError> {
    let ip = state.lookup_service.current_ip().await?;
    Ok(Json(CurrentIpResponse { ip }))
}

pub async fn geolocation_handler(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<GeolocationRecord>, AppError> {
    tracing::info!(%ip, "geolocation lookup requested");
    let record = state.lookup_service.geolocate(&ip).await?;
    Ok(Json(record))
}
