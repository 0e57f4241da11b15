//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! API が返すエラーボディの共通構造体。
//!
//! - 純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - `type` は [`ERROR_TYPE_BASE`] 配下の URI で問題の種類を識別する
//! - 500 系の `detail` は固定文言とし、内部情報を含めない

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
pub const ERROR_TYPE_BASE: &str = "https://climate-api.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

impl ErrorResponse {
    /// `error_type_suffix` はベース URI に付加される（例: `"internal-error"`）
    pub fn new(
        error_type_suffix: &str,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            detail: detail.into(),
        }
    }

    /// 500 Internal Server Error
    pub fn internal_error() -> Self {
        Self::new(
            "internal-error",
            "Internal Server Error",
            500,
            "内部エラーが発生しました",
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_internal_error_は500と固定detailを返す() {
        let error = ErrorResponse::internal_error();

        assert_eq!(
            error,
            ErrorResponse {
                error_type: "https://climate-api.example.com/errors/internal-error".to_string(),
                title:      "Internal Server Error".to_string(),
                status:     500,
                detail:     "内部エラーが発生しました".to_string(),
            }
        );
    }

    #[test]
    fn test_newはベースuriにsuffixを付加する() {
        let error = ErrorResponse::new("internal-error", "Internal Server Error", 500, "詳細");

        assert_eq!(
            error.error_type,
            "https://climate-api.example.com/errors/internal-error"
        );
    }

    #[test]
    fn test_jsonシリアライズでtypeフィールド名が正しい() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(json["type"], "https://climate-api.example.com/errors/internal-error");
        assert_eq!(json["title"], "Internal Server Error");
        assert_eq!(json["status"], 500);
        assert!(json.get("error_type").is_none());
    }
}
