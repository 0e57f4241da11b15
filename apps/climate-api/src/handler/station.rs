//! # 観測所 API ハンドラ

use std::sync::Arc;

use axum::{Json, extract::State};
use climate_domain::station::StationCode;
use serde::Serialize;

use super::ClimateState;
use crate::error::ApiError;

/// 観測所一覧レスポンス
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationCode>,
}

/// 観測所コードの一覧を取得する
///
/// ## エンドポイント
/// GET /api/v1.0/stations
#[tracing::instrument(skip_all)]
pub async fn list_stations(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<StationsResponse>, ApiError> {
    let codes = state.usecase.station_codes().await?;

    Ok(Json(StationsResponse { stations: codes }))
}
