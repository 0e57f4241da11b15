//! # ユースケース層
//!
//! 観測データの取得と集計の流れを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力の解釈とレスポンス整形のみ行い、
//!   ウィンドウ計算などはユースケースに集約する

pub mod climate;

pub use climate::ClimateUseCaseImpl;
