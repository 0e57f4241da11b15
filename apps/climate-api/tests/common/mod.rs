//! テスト共通ヘルパー
//!
//! モックリポジトリ・フィクスチャ DB からルーターを組み立て、
//! `oneshot` でリクエストを送るためのヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use climate_api::{
    app_builder::build_router,
    handler::{ClimateState, ReadinessState},
    usecase::ClimateUseCaseImpl,
};
use climate_domain::{
    measurement::Measurement,
    observation::ObservationDate,
    station::{Station, StationCode, StationRecord},
};
use climate_infra::{
    db,
    mock::{MockMeasurementRepository, MockStationRepository},
    repository::{MeasurementRepository, StationRepository},
    schema::ClimateSchema,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub fn station(code: &str) -> Station {
    Station::from_db(StationRecord {
        code:      StationCode::new(code),
        name:      Some(format!("{code} HI US")),
        latitude:  Some(21.0),
        longitude: Some(-157.0),
        elevation: Some(3.0),
    })
}

pub fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        station:       StationCode::new(station),
        date:          ObservationDate::parse(date).unwrap(),
        precipitation: prcp,
        temperature:   tobs,
    }
}

/// モックリポジトリを注入したルーターを組み立てる
///
/// Readiness Check 用にはスキーマ適用済みのフィクスチャ DB を使う。
pub async fn router_with(
    station_repo: Arc<dyn StationRepository>,
    measurement_repo: Arc<dyn MeasurementRepository>,
) -> Router {
    let pool = fixture_pool().await;
    build_router(
        Arc::new(ClimateState {
            usecase: ClimateUseCaseImpl::new(station_repo, measurement_repo),
        }),
        Arc::new(ReadinessState {
            pool,
            schema: ClimateSchema::CURRENT,
        }),
    )
}

/// 観測所と観測値を投入したモックからルーターを組み立てる
pub async fn router_with_data(stations: &[&str], measurements: Vec<Measurement>) -> Router {
    let station_repo = MockStationRepository::new();
    for code in stations {
        station_repo.add_station(station(code));
    }
    let measurement_repo = MockMeasurementRepository::new();
    for m in measurements {
        measurement_repo.add_measurement(m);
    }
    router_with(Arc::new(station_repo), Arc::new(measurement_repo)).await
}

pub async fn fixture_pool() -> SqlitePool {
    db::create_fixture_pool()
        .await
        .expect("フィクスチャ DB の作成に失敗")
}

/// GET リクエストを送り、ステータスとボディを返す
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// GET リクエストを送り、ボディを JSON として返す
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
