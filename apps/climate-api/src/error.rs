//! # Climate API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンス（RFC 9457 Problem Details）への変換を定義する。
//!
//! | バリアント | HTTP ステータス | 発生箇所 |
//! |-----------|----------------|---------|
//! | `Database` | 500 | データストアへの問い合わせ失敗 |
//! | `Internal` | 500 | パスパラメータの日付が不正、観測データが空、日付演算の範囲外 |
//!
//! どのエラーも利用者には同じ固定文言の 500 を返し、原因はログにのみ出力する。
//! 入力の日付が不正な場合も専用のレスポンスは設けない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use climate_domain::DomainError;
use climate_infra::InfraError;
use climate_shared::ErrorResponse;
use thiserror::Error;

/// Climate API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// データストアエラー
    #[error("データストアエラー: {0}")]
    Database(#[from] InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Database(e) => {
                tracing::error!(
                    error.category = "infrastructure",
                    error.kind = "database",
                    "データストアエラー: {}\n{}",
                    e,
                    e.span_trace()
                );
                ErrorResponse::internal_error()
            }
            ApiError::Internal(msg) => {
                tracing::error!(
                    error.category = "domain",
                    error.kind = "internal",
                    "内部エラー: {}",
                    msg
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
