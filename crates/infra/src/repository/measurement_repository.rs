//! # MeasurementRepository
//!
//! 観測値の取得と気温の集計を担当するリポジトリ。
//!
//! ## 日付の扱い
//!
//! `date` 列は `"YYYY-MM-DD"` 文字列で格納されている。
//! 範囲条件は [`ObservationDate::to_db_string`] でバインドし（文字列比較）、
//! 読み込んだ値は直ちに [`ObservationDate`] にパースする。
//! パースできない値は `InfraErrorKind::InvalidData` として扱う。
//!
//! ## 範囲条件
//!
//! すべての範囲付きクエリは同じ条件を使う:
//!
//! ```sql
//! date >= :start AND (:end IS NULL OR date <= :end)
//! ```

use async_trait::async_trait;
use climate_domain::{
    measurement::{PrecipitationReading, TemperatureObservation, TemperatureStats},
    observation::{DateRange, ObservationDate},
    station::StationCode,
};
use sqlx::SqlitePool;

use crate::error::InfraError;

/// 観測値リポジトリトレイト
#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    /// 最新の観測日（`MAX(date)`）を取得する
    ///
    /// 観測値が 1 件もない場合は `None`。
    async fn find_latest_date(&self) -> Result<Option<ObservationDate>, InfraError>;

    /// 範囲内の降水量を `(date, station)` の昇順で取得する
    async fn find_precipitation(
        &self,
        range: &DateRange,
    ) -> Result<Vec<PrecipitationReading>, InfraError>;

    /// 範囲内の気温を `(date, station)` の昇順で取得する
    async fn find_temperatures(
        &self,
        range: &DateRange,
    ) -> Result<Vec<TemperatureObservation>, InfraError>;

    /// 範囲内の気温の MIN / AVG / MAX を求める
    ///
    /// 該当行がない場合は 3 つとも `None`。
    async fn temperature_stats(&self, range: &DateRange) -> Result<TemperatureStats, InfraError>;
}

#[derive(sqlx::FromRow)]
struct PrecipitationRow {
    station: String,
    date:    String,
    prcp:    Option<f64>,
}

#[derive(sqlx::FromRow)]
struct TemperatureRow {
    station: String,
    date:    String,
    tobs:    f64,
}

#[derive(sqlx::FromRow)]
struct TemperatureStatsRow {
    min_tobs: Option<f64>,
    avg_tobs: Option<f64>,
    max_tobs: Option<f64>,
}

fn parse_stored_date(value: &str) -> Result<ObservationDate, InfraError> {
    ObservationDate::parse(value)
        .map_err(|e| InfraError::invalid_data(format!("measurement.date: {e}")))
}

fn range_bounds(range: &DateRange) -> (String, Option<String>) {
    (
        range.start().to_db_string(),
        range.end().map(|end| end.to_db_string()),
    )
}

/// SQLite 実装の MeasurementRepository
#[derive(Debug, Clone)]
pub struct SqliteMeasurementRepository {
    pool: SqlitePool,
}

impl SqliteMeasurementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeasurementRepository for SqliteMeasurementRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_latest_date(&self) -> Result<Option<ObservationDate>, InfraError> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        latest.as_deref().map(parse_stored_date).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(start = %range.start()))]
    async fn find_precipitation(
        &self,
        range: &DateRange,
    ) -> Result<Vec<PrecipitationReading>, InfraError> {
        let (start, end) = range_bounds(range);
        let rows: Vec<PrecipitationRow> = sqlx::query_as(
            r#"
            SELECT station, date, prcp
            FROM measurement
            WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
            ORDER BY date, station
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(PrecipitationReading {
                    date:          parse_stored_date(&row.date)?,
                    station:       StationCode::new(row.station),
                    precipitation: row.prcp,
                })
            })
            .collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(start = %range.start()))]
    async fn find_temperatures(
        &self,
        range: &DateRange,
    ) -> Result<Vec<TemperatureObservation>, InfraError> {
        let (start, end) = range_bounds(range);
        let rows: Vec<TemperatureRow> = sqlx::query_as(
            r#"
            SELECT station, date, tobs
            FROM measurement
            WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
            ORDER BY date, station
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(TemperatureObservation {
                    date:        parse_stored_date(&row.date)?,
                    station:     StationCode::new(row.station),
                    temperature: row.tobs,
                })
            })
            .collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(start = %range.start()))]
    async fn temperature_stats(&self, range: &DateRange) -> Result<TemperatureStats, InfraError> {
        let (start, end) = range_bounds(range);
        let row: TemperatureStatsRow = sqlx::query_as(
            r#"
            SELECT
                MIN(tobs) AS min_tobs,
                AVG(tobs) AS avg_tobs,
                MAX(tobs) AS max_tobs
            FROM measurement
            WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(TemperatureStats {
            min: row.min_tobs,
            avg: row.avg_tobs,
            max: row.max_tobs,
        })
    }
}
