//! # Climate API ライブラリ
//!
//! 気象観測データセットを読み取り専用で公開する HTTP API。
//! ハンドラ・ユースケース・ルーター構築を公開し、統合テストから利用できるようにする。
//!
//! ## エンドポイント
//!
//! | パス | 内容 |
//! |------|------|
//! | `/` | ルート一覧（HTML） |
//! | `/api/v1.0/precipitation` | 直近 1 年の降水量（観測日 → 降水量） |
//! | `/api/v1.0/stations` | 観測所コード一覧 |
//! | `/api/v1.0/tobs` | 直近 1 年の気温観測値 |
//! | `/api/v1.0/temp/{start}` | 開始日以降の気温統計 `[min, avg, max]` |
//! | `/api/v1.0/temp/{start}/{end}` | 期間内（両端を含む）の気温統計 |
//! | `/health` | Liveness Check |
//! | `/health/ready` | Readiness Check |

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
