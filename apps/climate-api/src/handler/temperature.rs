//! # 気温 API ハンドラ
//!
//! - `/api/v1.0/tobs`: 直近 1 年の気温観測値
//! - `/api/v1.0/temp/{start}` / `/api/v1.0/temp/{start}/{end}`: 気温統計
//!
//! `start` / `end` は `YYYY-MM-DD` 形式。解釈できない場合は他の内部エラーと同じ 500 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use climate_domain::{
    measurement::{TemperatureObservation, TemperatureStats},
    observation::{DateRange, ObservationDate},
};
use serde::Serialize;

use super::ClimateState;
use crate::error::ApiError;

/// 気温観測値 DTO
#[derive(Debug, Serialize)]
pub struct TemperatureObservationDto {
    pub date:        ObservationDate,
    pub temperature: f64,
}

impl From<TemperatureObservation> for TemperatureObservationDto {
    fn from(observation: TemperatureObservation) -> Self {
        Self {
            date:        observation.date,
            temperature: observation.temperature,
        }
    }
}

/// 気温観測値一覧レスポンス
#[derive(Debug, Serialize)]
pub struct TemperatureObservationsResponse {
    pub temperature_observations: Vec<TemperatureObservationDto>,
}

/// 気温統計レスポンス
///
/// `temperature_stats` は常に `[min, avg, max]` の 3 要素。
#[derive(Debug, Serialize)]
pub struct TemperatureStatsResponse {
    pub temperature_stats: [Option<f64>; 3],
}

impl From<TemperatureStats> for TemperatureStatsResponse {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            temperature_stats: stats.to_array(),
        }
    }
}

/// 直近 1 年の気温観測値を取得する
///
/// ## エンドポイント
/// GET /api/v1.0/tobs
#[tracing::instrument(skip_all)]
pub async fn list_temperature_observations(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<TemperatureObservationsResponse>, ApiError> {
    let observations = state.usecase.temperature_observations_last_year().await?;

    Ok(Json(TemperatureObservationsResponse {
        temperature_observations: observations
            .into_iter()
            .map(TemperatureObservationDto::from)
            .collect(),
    }))
}

/// 開始日以降の気温統計を取得する
///
/// ## エンドポイント
/// GET /api/v1.0/temp/{start}
#[tracing::instrument(skip_all, fields(start = %start))]
pub async fn get_temperature_stats_since(
    State(state): State<Arc<ClimateState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStatsResponse>, ApiError> {
    let range = DateRange::parse(&start, None)?;
    let stats = state.usecase.temperature_stats(range).await?;
    Ok(Json(TemperatureStatsResponse::from(stats)))
}

/// 開始日から終了日まで（両端を含む）の気温統計を取得する
///
/// ## エンドポイント
/// GET /api/v1.0/temp/{start}/{end}
#[tracing::instrument(skip_all, fields(start = %start, end = %end))]
pub async fn get_temperature_stats_between(
    State(state): State<Arc<ClimateState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStatsResponse>, ApiError> {
    let range = DateRange::parse(&start, Some(&end))?;
    let stats = state.usecase.temperature_stats(range).await?;
    Ok(Json(TemperatureStatsResponse::from(stats)))
}
