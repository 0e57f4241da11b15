//! # Climate API サーバー
//!
//! 気象観測データセット（SQLite）を読み取り専用で公開する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CLIMATE_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `CLIMATE_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | No | データストア URL（デフォルト: `sqlite://Resources/hawaii.sqlite`） |
//! | `DATABASE_MAX_CONNECTIONS` | No | 最大接続数（デフォルト: `5`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,climate=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p climate-api
//!
//! DATABASE_URL=sqlite:///data/hawaii.sqlite LOG_FORMAT=json cargo run -p climate-api --release
//! ```

use anyhow::Context;
use climate_api::{app_builder::build_app, config::ApiConfig};
use climate_infra::{
    db,
    schema::{ClimateSchema, verify_schema},
};
use climate_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Climate API サーバーのエントリーポイント
///
/// 1. `.env` とトレーシングの初期化
/// 2. 設定の読み込み
/// 3. データストア接続とスキーマ検証
/// 4. ルーターの構築とサーバー起動（Ctrl-C / SIGTERM で停止）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("climate-api");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "climate-api").entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Climate API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("データストアに接続できません: {}", config.database_url))?;
    tracing::info!("データストアに接続しました");

    let schema = ClimateSchema::CURRENT;
    verify_schema(&pool, &schema)
        .await
        .context("データストアのスキーマが想定と一致しません")?;
    tracing::info!(version = schema.version, "スキーマを検証しました");

    let app = build_app(pool.clone(), schema);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("{}:{} にバインドできません", config.host, config.port))?;
    tracing::info!("Climate API サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Climate API サーバーを停止しました");

    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl-C ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
