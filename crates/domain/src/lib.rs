//! # Climate ドメイン層
//!
//! 気象観測データ（観測所・降水量・気温）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **読み取り専用**: データセットは起動前に投入済みで、このシステムは変更しない
//! - **値オブジェクト**: 観測日・観測所コードを Newtype でラップし、型安全性を確保
//! - **インフラ非依存**: DB やHTTP には依存しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! climate-api → infra → domain
//!          ↘      ↓
//!            shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`observation`] - 観測日と日付範囲
//! - [`station`] - 観測所
//! - [`measurement`] - 観測値と気温統計
//!
//! ## 使用例
//!
//! ```rust
//! use climate_domain::observation::{DateRange, ObservationDate};
//!
//! let latest = ObservationDate::parse("2017-08-23").unwrap();
//! let window = DateRange::trailing_year(latest).unwrap();
//! assert_eq!(window.start().to_string(), "2016-08-23");
//! ```

pub mod error;
pub mod measurement;
pub mod observation;
pub mod station;

pub use error::DomainError;
