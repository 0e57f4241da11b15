//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗や、データセットが前提を満たさない状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `InvalidDate` | 500 Internal Server Error | `YYYY-MM-DD` として解釈できない日付 |
//! | `DateOutOfRange` | 500 Internal Server Error | 日付演算が表現可能な範囲を超えた |
//! | `EmptyDataset` | 500 Internal Server Error | 観測データが 1 件も存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use climate_domain::DomainError;
//!
//! let error = DomainError::InvalidDate("2017-13-01".to_string());
//! assert_eq!(
//!     error.to_string(),
//!     "日付の形式が不正です（YYYY-MM-DD で指定してください）: 2017-13-01"
//! );
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 日付文字列が `YYYY-MM-DD` 形式でない、または暦上存在しない
    #[error("日付の形式が不正です（YYYY-MM-DD で指定してください）: {0}")]
    InvalidDate(String),

    /// 日付演算の結果が表現可能な範囲外
    #[error("日付が範囲外です: {0}")]
    DateOutOfRange(String),

    /// 観測データが存在しない
    ///
    /// 最新観測日（`MAX(date)`）が求められないため、
    /// 直近 1 年のウィンドウを計算できない。
    #[error("観測データが存在しません")]
    EmptyDataset,
}
