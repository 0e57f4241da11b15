//! # SQLite データストア接続管理
//!
//! 気象観測データセット（SQLite ファイル）への接続プールを作成する。
//!
//! ## 設計方針
//!
//! - **明示的なハンドル**: プールは起動時に一度だけ作成し、リポジトリ経由で
//!   各ハンドラの State に注入する。モジュールレベルのグローバルは持たない
//! - **読み取り専用**: `read_only(true)` で開き、データセットを変更できないようにする
//! - **スコープ付き取得**: クエリごとにプールから接続を借り、ドロップ時に返却する。
//!   エラーで早期リターンした場合も返却される
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use climate_infra::db;
//!
//! let pool = db::create_pool("sqlite://Resources/hawaii.sqlite", 5).await?;
//! db::ping(&pool).await?;
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// 接続取得のタイムアウト
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Readiness Check のタイムアウト
pub const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// 共通のプール設定
pub fn pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new().acquire_timeout(ACQUIRE_TIMEOUT)
}

/// 読み取り専用の接続プールを作成する
///
/// # 引数
///
/// * `database_url` - `sqlite://<path>` 形式の接続 URL
/// * `max_connections` - 最大接続数
///
/// # エラー
///
/// URL が不正、ファイルが存在しない、開けない場合は `sqlx::Error` を返す。
/// ファイルは作成しない。
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .create_if_missing(false);

    pool_options()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// データストアに到達できるかを確認する
///
/// `SELECT 1` を [`PING_TIMEOUT`] 以内に実行できなければエラー。
#[tracing::instrument(skip_all)]
pub async fn ping(pool: &SqlitePool) -> Result<(), InfraError> {
    match tokio::time::timeout(PING_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(result) => {
            result?;
            Ok(())
        }
        Err(_) => Err(InfraError::unexpected("データストアへの疎通確認がタイムアウトしました")),
    }
}

/// マイグレーションを適用する
///
/// 本番のデータストアには適用しない（読み取り専用で開くため失敗する）。
/// テスト用フィクスチャ DB の構築に使う。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// テスト用のインメモリ DB を作成し、スキーマを適用する
///
/// インメモリ DB は接続ごとに別の DB になるため、接続数を 1 に固定し、
/// アイドル切断も無効にする。
#[cfg(any(test, feature = "test-utils"))]
pub async fn create_fixture_pool() -> Result<SqlitePool, InfraError> {
    let pool = pool_options()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_poolにpingが通る() {
        let pool = create_fixture_pool().await.unwrap();
        assert!(ping(&pool).await.is_ok());
    }

    #[tokio::test]
    async fn test_存在しないファイルは作成せずエラーになる() {
        let result = create_pool("sqlite://does/not/exist/climate.sqlite", 1).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_onlyの接続では書き込みが失敗する() {
        let dir = std::env::temp_dir().join(format!("climate-infra-ro-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("readonly.sqlite");

        // 書き込み可能な接続でファイルとテーブルを用意する
        let writable = SqlitePoolOptions::new()
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(&path)
                    .create_if_missing(true),
            )
            .await
            .unwrap();
        run_migrations(&writable).await.unwrap();
        writable.close().await;

        let url = format!("sqlite://{}", path.display());
        let pool = create_pool(&url, 1).await.unwrap();

        let result = sqlx::query("INSERT INTO station (station) VALUES ('USC00000000')")
            .execute(&pool)
            .await;
        assert!(result.is_err());

        pool.close().await;
        std::fs::remove_dir_all(&dir).ok();
    }
}
