//! # ヘルスチェックハンドラ
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（データストアへの疎通とスキーマを確認）
//!
//! レスポンス型は [`climate_shared::HealthResponse`] / [`climate_shared::ReadinessResponse`] を参照。

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use climate_infra::{
    db,
    schema::{ClimateSchema, verify_schema},
};
use climate_shared::{CheckStatus, HealthResponse, ReadinessResponse};
use sqlx::SqlitePool;

/// Liveness Check エンドポイント
///
/// ## エンドポイント
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub pool:   SqlitePool,
    pub schema: ClimateSchema,
}

/// Readiness Check エンドポイント
///
/// データストアへの疎通（`database`）とスキーマ（`schema`）を並行チェックする。
/// 全チェック OK → 200、1 つでも失敗 → 503。
///
/// ## エンドポイント
/// GET /health/ready
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let (database, schema) = tokio::join!(
        check_database(&state.pool),
        check_schema(&state.pool, &state.schema),
    );

    let checks = BTreeMap::from([
        ("database".to_string(), database),
        ("schema".to_string(), schema),
    ]);
    let response = ReadinessResponse::from_checks(checks);
    let http_status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

async fn check_database(pool: &SqlitePool) -> CheckStatus {
    match db::ping(pool).await {
        Ok(()) => CheckStatus::Ok,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check: database ping failed");
            CheckStatus::Error
        }
    }
}

async fn check_schema(pool: &SqlitePool, schema: &ClimateSchema) -> CheckStatus {
    match tokio::time::timeout(db::PING_TIMEOUT, verify_schema(pool, schema)).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: schema verification failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: schema verification timed out");
            CheckStatus::Error
        }
    }
}
