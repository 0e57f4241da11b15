//! # リポジトリ実装
//!
//! データストアへの読み取りクエリをトレイトの背後にカプセル化する。
//!
//! ## 設計方針
//!
//! - **読み取り専用**: 書き込みメソッドは持たない
//! - **トレイト境界**: ユースケース層は `Arc<dyn Trait>` で受け取り、
//!   テストではインメモリ実装（`mock` モジュール）に差し替える
//! - **日付の型変換**: `date` 列は読み込み直後に `ObservationDate` へ変換する

pub mod measurement_repository;
pub mod station_repository;

pub use measurement_repository::{MeasurementRepository, SqliteMeasurementRepository};
pub use station_repository::{SqliteStationRepository, StationRepository};
