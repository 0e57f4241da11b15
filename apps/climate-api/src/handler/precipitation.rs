//! # 降水量 API ハンドラ

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State};
use climate_domain::measurement::PrecipitationByDate;
use serde::Serialize;

use super::ClimateState;
use crate::error::ApiError;

/// 観測日（`YYYY-MM-DD`）→ 降水量のマップ
///
/// キーは日付の昇順で出力される。欠測は `null`。
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PrecipitationDto(BTreeMap<String, Option<f64>>);

impl From<PrecipitationByDate> for PrecipitationDto {
    fn from(map: PrecipitationByDate) -> Self {
        Self(
            map.iter()
                .map(|(date, precipitation)| (date.to_string(), *precipitation))
                .collect(),
        )
    }
}

/// 直近 1 年の降水量を取得する
///
/// ## エンドポイント
/// GET /api/v1.0/precipitation
#[tracing::instrument(skip_all)]
pub async fn get_precipitation(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<PrecipitationDto>, ApiError> {
    let map = state.usecase.precipitation_last_year().await?;
    Ok(Json(PrecipitationDto::from(map)))
}
