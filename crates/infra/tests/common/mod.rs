//! テスト共通フィクスチャ
//!
//! インメモリ SQLite にマイグレーションを適用し、観測所・観測値を投入するヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use climate_infra::db;
use sqlx::SqlitePool;

/// スキーマ適用済みの空のフィクスチャ DB を作成する
pub async fn empty_pool() -> SqlitePool {
    db::create_fixture_pool()
        .await
        .expect("フィクスチャ DB の作成に失敗")
}

/// 観測所を 1 件投入する
pub async fn insert_station(pool: &SqlitePool, code: &str, name: &str) {
    sqlx::query(
        r#"
        INSERT INTO station (station, name, latitude, longitude, elevation)
        VALUES (?1, ?2, 21.2716, -157.8168, 3.0)
        "#,
    )
    .bind(code)
    .bind(name)
    .execute(pool)
    .await
    .expect("観測所の投入に失敗");
}

/// 観測値を 1 件投入する
pub async fn insert_measurement(
    pool: &SqlitePool,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: f64,
) {
    sqlx::query(
        r#"
        INSERT INTO measurement (station, date, prcp, tobs)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(station)
    .bind(date)
    .bind(prcp)
    .bind(tobs)
    .execute(pool)
    .await
    .expect("観測値の投入に失敗");
}

/// 2 観測所・数日分の観測値を投入したフィクスチャ DB
///
/// | station | date | prcp | tobs |
/// |---|---|---|---|
/// | USC00519397 | 2016-08-22 | 0.40 | 70 |
/// | USC00519397 | 2016-08-23 | 0.00 | 81 |
/// | USC00519397 | 2017-08-20 | 0.01 | 45 |
/// | USC00519397 | 2017-08-21 | NULL | 77 |
/// | USC00516128 | 2017-08-21 | 0.56 | 76 |
/// | USC00519397 | 2017-08-23 | 0.00 | 81 |
///
/// 最新観測日は 2017-08-23、直近 1 年のウィンドウ開始日は 2016-08-23。
pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;

    insert_station(&pool, "USC00519397", "WAIKIKI 717.2, HI US").await;
    insert_station(&pool, "USC00516128", "MANOA LYON ARBO 785.2, HI US").await;

    for (station, date, prcp, tobs) in [
        ("USC00519397", "2016-08-22", Some(0.40), 70.0),
        ("USC00519397", "2016-08-23", Some(0.00), 81.0),
        ("USC00519397", "2017-08-20", Some(0.01), 45.0),
        ("USC00519397", "2017-08-21", None, 77.0),
        ("USC00516128", "2017-08-21", Some(0.56), 76.0),
        ("USC00519397", "2017-08-23", Some(0.00), 81.0),
    ] {
        insert_measurement(&pool, station, date, prcp, tobs).await;
    }

    pool
}
