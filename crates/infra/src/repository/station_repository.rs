//! # StationRepository
//!
//! 観測所メタデータの取得を担当するリポジトリ。

use async_trait::async_trait;
use climate_domain::station::{Station, StationCode, StationRecord};
use sqlx::SqlitePool;

use crate::error::InfraError;

/// 観測所リポジトリトレイト
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// 全観測所を観測所コードの昇順で取得する
    async fn find_all(&self) -> Result<Vec<Station>, InfraError>;
}

#[derive(sqlx::FromRow)]
struct StationRow {
    station:   String,
    name:      Option<String>,
    latitude:  Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station::from_db(StationRecord {
            code:      StationCode::new(row.station),
            name:      row.name,
            latitude:  row.latitude,
            longitude: row.longitude,
            elevation: row.elevation,
        })
    }
}

/// SQLite 実装の StationRepository
#[derive(Debug, Clone)]
pub struct SqliteStationRepository {
    pool: SqlitePool,
}

impl SqliteStationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StationRepository for SqliteStationRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Station>, InfraError> {
        let rows: Vec<StationRow> = sqlx::query_as(
            r#"
            SELECT station, name, latitude, longitude, elevation
            FROM station
            ORDER BY station
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Station::from).collect())
    }
}
