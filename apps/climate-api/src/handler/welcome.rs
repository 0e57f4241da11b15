//! # ルート一覧ハンドラ
//!
//! 利用可能なルートと日付形式を HTML で返す。

use axum::response::Html;

const WELCOME_HTML: &str = concat!(
    "Welcome to the Hawaii Climate Analysis API!<br/>",
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/temp/start<br/>",
    "/api/v1.0/temp/start/end<br/>",
    "<p>'start' and 'end' dates should be in the format YYYY-MM-DD.</p>",
);

/// ルート一覧
///
/// ## エンドポイント
/// GET /
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_HTML)
}
