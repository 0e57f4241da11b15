//! # HTTP ハンドラ
//!
//! Climate API のエンドポイントを実装する。
//!
//! ## 設計方針
//!
//! - **薄いハンドラ**: パスパラメータの解釈とレスポンス整形のみを行う
//! - **State**: ユースケースを [`ClimateState`] に保持し、`Arc` で共有する
//!
//! ## モジュール構成
//!
//! - `welcome`: ルート一覧（`/`）
//! - `precipitation`: 直近 1 年の降水量
//! - `station`: 観測所一覧
//! - `temperature`: 気温観測値と気温統計
//! - `health`: Liveness / Readiness Check

pub mod health;
pub mod precipitation;
pub mod station;
pub mod temperature;
pub mod welcome;

pub use health::{ReadinessState, health_check, readiness_check};
pub use precipitation::get_precipitation;
pub use station::list_stations;
pub use temperature::{
    get_temperature_stats_between,
    get_temperature_stats_since,
    list_temperature_observations,
};
pub use welcome::welcome;

use crate::usecase::ClimateUseCaseImpl;

/// 観測データ API ハンドラーの State
pub struct ClimateState {
    pub usecase: ClimateUseCaseImpl,
}
