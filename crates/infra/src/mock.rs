//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! climate-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 範囲の判定と集計はドメイン層の [`DateRange::contains`] と
//! [`TemperatureStats::from_temperatures`] で行い、SQLite 実装と同じ結果を返す。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use climate_domain::{
    measurement::{Measurement, PrecipitationReading, TemperatureObservation, TemperatureStats},
    observation::{DateRange, ObservationDate},
    station::Station,
};

use crate::{
    error::InfraError,
    repository::{MeasurementRepository, StationRepository},
};

// ===== MockStationRepository =====

#[derive(Clone, Default)]
pub struct MockStationRepository {
    stations: Arc<Mutex<Vec<Station>>>,
}

impl MockStationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_station(&self, station: Station) {
        self.stations.lock().unwrap().push(station);
    }
}

#[async_trait]
impl StationRepository for MockStationRepository {
    async fn find_all(&self) -> Result<Vec<Station>, InfraError> {
        let mut stations = self.stations.lock().unwrap().clone();
        stations.sort_by(|a, b| a.code().cmp(b.code()));
        Ok(stations)
    }
}

// ===== MockMeasurementRepository =====

#[derive(Clone, Default)]
pub struct MockMeasurementRepository {
    measurements: Arc<Mutex<Vec<Measurement>>>,
}

impl MockMeasurementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_measurement(&self, measurement: Measurement) {
        self.measurements.lock().unwrap().push(measurement);
    }

    /// 範囲内の観測値を `(date, station)` の昇順で返す
    fn in_range(&self, range: &DateRange) -> Vec<Measurement> {
        let mut matched: Vec<Measurement> = self
            .measurements
            .lock()
            .unwrap()
            .iter()
            .filter(|m| range.contains(m.date))
            .cloned()
            .collect();
        matched.sort_by(|a, b| (a.date, &a.station).cmp(&(b.date, &b.station)));
        matched
    }
}

#[async_trait]
impl MeasurementRepository for MockMeasurementRepository {
    async fn find_latest_date(&self) -> Result<Option<ObservationDate>, InfraError> {
        Ok(self
            .measurements
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.date)
            .max())
    }

    async fn find_precipitation(
        &self,
        range: &DateRange,
    ) -> Result<Vec<PrecipitationReading>, InfraError> {
        Ok(self
            .in_range(range)
            .iter()
            .map(Measurement::to_precipitation_reading)
            .collect())
    }

    async fn find_temperatures(
        &self,
        range: &DateRange,
    ) -> Result<Vec<TemperatureObservation>, InfraError> {
        Ok(self
            .in_range(range)
            .iter()
            .map(Measurement::to_temperature_observation)
            .collect())
    }

    async fn temperature_stats(&self, range: &DateRange) -> Result<TemperatureStats, InfraError> {
        Ok(TemperatureStats::from_temperatures(
            self.in_range(range).iter().map(|m| m.temperature),
        ))
    }
}

// ===== FailingRepository =====

/// すべての呼び出しでデータストアエラーを返すリポジトリ
///
/// データストア障害時のエラーレスポンスを検証するために使う。
#[derive(Clone, Default)]
pub struct FailingRepository;

impl FailingRepository {
    fn error() -> InfraError {
        InfraError::from(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl StationRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Station>, InfraError> {
        Err(Self::error())
    }
}

#[async_trait]
impl MeasurementRepository for FailingRepository {
    async fn find_latest_date(&self) -> Result<Option<ObservationDate>, InfraError> {
        Err(Self::error())
    }

    async fn find_precipitation(
        &self,
        _range: &DateRange,
    ) -> Result<Vec<PrecipitationReading>, InfraError> {
        Err(Self::error())
    }

    async fn find_temperatures(
        &self,
        _range: &DateRange,
    ) -> Result<Vec<TemperatureObservation>, InfraError> {
        Err(Self::error())
    }

    async fn temperature_stats(&self, _range: &DateRange) -> Result<TemperatureStats, InfraError> {
        Err(Self::error())
    }
}
