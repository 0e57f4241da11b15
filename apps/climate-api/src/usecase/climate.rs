//! # 気象観測ユースケース
//!
//! 降水量・観測所・気温の取得と、気温統計の集計を行う。
//!
//! ## 直近 1 年のウィンドウ
//!
//! 降水量と気温観測値は「最新観測日から 365 日遡った日以降」を対象とする。
//! 最新観測日はリクエストごとにデータストアから求める。

use std::sync::Arc;

use climate_domain::{
    DomainError,
    measurement::{PrecipitationByDate, TemperatureObservation, TemperatureStats},
    observation::DateRange,
    station::{Station, StationCode},
};
use climate_infra::repository::{MeasurementRepository, StationRepository};

use crate::error::ApiError;

/// 気象観測ユースケース実装
pub struct ClimateUseCaseImpl {
    station_repo:     Arc<dyn StationRepository>,
    measurement_repo: Arc<dyn MeasurementRepository>,
}

impl ClimateUseCaseImpl {
    pub fn new(
        station_repo: Arc<dyn StationRepository>,
        measurement_repo: Arc<dyn MeasurementRepository>,
    ) -> Self {
        Self {
            station_repo,
            measurement_repo,
        }
    }

    /// 最新観測日を基準とした直近 1 年のウィンドウを求める
    ///
    /// 観測値が 1 件もない場合は `DomainError::EmptyDataset`。
    async fn trailing_window(&self) -> Result<DateRange, ApiError> {
        let latest = self
            .measurement_repo
            .find_latest_date()
            .await?
            .ok_or(DomainError::EmptyDataset)?;
        let window = DateRange::trailing_year(latest)?;

        tracing::debug!(latest = %latest, start = %window.start(), "直近 1 年のウィンドウ");
        Ok(window)
    }

    /// 直近 1 年の降水量を観測日ごとに返す
    pub async fn precipitation_last_year(&self) -> Result<PrecipitationByDate, ApiError> {
        let window = self.trailing_window().await?;
        let readings = self.measurement_repo.find_precipitation(&window).await?;
        Ok(PrecipitationByDate::collect(readings))
    }

    /// 全観測所のコードを昇順で返す
    pub async fn station_codes(&self) -> Result<Vec<StationCode>, ApiError> {
        let stations = self.station_repo.find_all().await?;
        Ok(stations.into_iter().map(Station::into_code).collect())
    }

    /// 直近 1 年の気温観測値を返す（同じ日付の行もすべて含む）
    pub async fn temperature_observations_last_year(
        &self,
    ) -> Result<Vec<TemperatureObservation>, ApiError> {
        let window = self.trailing_window().await?;
        Ok(self.measurement_repo.find_temperatures(&window).await?)
    }

    /// 指定範囲の気温統計を返す
    ///
    /// 該当行がない場合はエラーではなく、3 つとも `None` の統計を返す。
    pub async fn temperature_stats(&self, range: DateRange) -> Result<TemperatureStats, ApiError> {
        Ok(self.measurement_repo.temperature_stats(&range).await?)
    }
}
