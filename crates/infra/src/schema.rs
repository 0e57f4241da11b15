//! # データストアのスキーマ定義
//!
//! データストアのテーブル構造を実行時に自動検出（リフレクション）せず、
//! アプリケーションが期待する列をコード上で明示する。
//!
//! 起動時に [`verify_schema`] で実際のデータストアと突き合わせ、
//! 不足があれば起動を中止する。検証済みの [`ClimateSchema`] は
//! アプリケーションの State に渡され、Readiness Check でも同じ定義で再検証する。
//!
//! 列を追加・変更した場合は [`SCHEMA_VERSION`] を上げ、
//! `migrations/` のフィクスチャ用 DDL も合わせて更新する。

use sqlx::SqlitePool;

use crate::error::InfraError;

/// スキーマのバージョン
pub const SCHEMA_VERSION: u32 = 1;

/// テーブル定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name:    &'static str,
    pub columns: &'static [&'static str],
}

/// 気象観測データセットのスキーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimateSchema {
    pub version:     u32,
    pub station:     TableSchema,
    pub measurement: TableSchema,
}

impl ClimateSchema {
    /// 現行バージョンのスキーマ
    pub const CURRENT: ClimateSchema = ClimateSchema {
        version:     SCHEMA_VERSION,
        station:     TableSchema {
            name:    "station",
            columns: &["station", "name", "latitude", "longitude", "elevation"],
        },
        measurement: TableSchema {
            name:    "measurement",
            columns: &["station", "date", "prcp", "tobs"],
        },
    };

    pub fn tables(&self) -> [&TableSchema; 2] {
        [&self.station, &self.measurement]
    }
}

/// データストアが `schema` の列をすべて持っているかを検証する
///
/// 余分な列（`id` など）は許容する。
///
/// # エラー
///
/// 不足しているテーブル・列を列挙した `InfraErrorKind::Schema` を返す。
#[tracing::instrument(skip_all, fields(version = schema.version))]
pub async fn verify_schema(pool: &SqlitePool, schema: &ClimateSchema) -> Result<(), InfraError> {
    let mut missing = Vec::new();

    for table in schema.tables() {
        let actual: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
            .bind(table.name)
            .fetch_all(pool)
            .await?;

        if actual.is_empty() {
            missing.push(format!("テーブル {}", table.name));
            continue;
        }

        missing.extend(
            table
                .columns
                .iter()
                .filter(|column| !actual.iter().any(|a| a.as_str() == **column))
                .map(|column| format!("{}.{}", table.name, column)),
        );
    }

    if !missing.is_empty() {
        return Err(InfraError::schema(format!(
            "スキーマ v{} に必要な定義がありません: {}",
            schema.version,
            missing.join(", ")
        )));
    }

    tracing::debug!("スキーマを検証しました");
    Ok(())
}
