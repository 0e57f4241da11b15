//! # Climate インフラ層
//!
//! 気象観測データセット（SQLite）への接続と読み取りを担当する。
//!
//! ## 責務
//!
//! - **接続管理**: 読み取り専用の接続プール作成と疎通確認（[`db`]）
//! - **スキーマ検証**: 期待するテーブル・列の明示と起動時検証（[`schema`]）
//! - **リポジトリ実装**: ドメイン型を返す読み取りクエリ（[`repository`]）
//!
//! ## 依存関係
//!
//! ```text
//! climate-api → infra → domain
//! ```
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use climate_infra::{
//!     db,
//!     repository::{SqliteStationRepository, StationRepository},
//!     schema::{ClimateSchema, verify_schema},
//! };
//!
//! let pool = db::create_pool("sqlite://Resources/hawaii.sqlite", 5).await?;
//! verify_schema(&pool, &ClimateSchema::CURRENT).await?;
//!
//! let stations = SqliteStationRepository::new(pool).find_all().await?;
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;
pub mod schema;

pub use error::{InfraError, InfraErrorKind};
