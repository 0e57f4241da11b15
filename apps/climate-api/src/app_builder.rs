//! # アプリケーション構築
//!
//! DI（リポジトリ・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use climate_infra::{
    repository::{SqliteMeasurementRepository, SqliteStationRepository},
    schema::ClimateSchema,
};
use climate_shared::{canonical_log::CanonicalLogLineLayer, observability::make_request_span};
use sqlx::SqlitePool;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ClimateState,
        ReadinessState,
        get_precipitation,
        get_temperature_stats_between,
        get_temperature_stats_since,
        health_check,
        list_stations,
        list_temperature_observations,
        readiness_check,
        welcome,
    },
    usecase::ClimateUseCaseImpl,
};

/// 接続プールから依存を組み立て、ルーターを返す
///
/// `schema` は起動時に検証済みのもの。Readiness Check で再検証に使う。
pub fn build_app(pool: SqlitePool, schema: ClimateSchema) -> Router {
    let usecase = ClimateUseCaseImpl::new(
        Arc::new(SqliteStationRepository::new(pool.clone())),
        Arc::new(SqliteMeasurementRepository::new(pool.clone())),
    );

    build_router(
        Arc::new(ClimateState { usecase }),
        Arc::new(ReadinessState { pool, schema }),
    )
}

/// State からルーターを組み立てる
///
/// テストではモックリポジトリを注入した State を渡す。
pub fn build_router(
    climate_state: Arc<ClimateState>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/api/v1.0/precipitation", get(get_precipitation))
                .route("/api/v1.0/stations", get(list_stations))
                .route("/api/v1.0/tobs", get(list_temperature_observations))
                .route("/api/v1.0/temp/{start}", get(get_temperature_stats_since))
                .route(
                    "/api/v1.0/temp/{start}/{end}",
                    get(get_temperature_stats_between),
                )
                .with_state(climate_state),
        )
        // レイヤー順序: 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: x-request-id を生成（クライアント提供値があればそれを使用）
        // 2. TraceLayer: request_id を含むスパンを作成
        // 3. CanonicalLogLineLayer: リクエスト完了時に 1 行サマリログを出力（スパン内）
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに x-request-id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
