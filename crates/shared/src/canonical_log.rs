//! # Canonical Log Line ミドルウェア
//!
//! リクエスト完了時に、メソッド・パス・ステータス・レイテンシを 1 行に集約した
//! サマリログを出力する tower Layer。
//!
//! TraceLayer の内側に配置し、`request` スパンのフィールド（request_id 等）を
//! そのまま引き継ぐ:
//!
//! ```text
//! TraceLayer → CanonicalLogLineLayer → handler
//! ```
//!
//! ヘルスチェック（`/health`, `/health/ready`）はロードバランサーから高頻度で
//! 呼ばれるため出力しない。

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

fn is_health_check_path(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// Canonical Log Line を出力する Layer
#[derive(Clone, Debug, Default)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を使い、self には clone を残す
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let path = req.uri().path().to_owned();
        if is_health_check_path(&path) {
            return Box::pin(async move { inner.call(req).await });
        }

        let method = req.method().clone();
        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(response) => tracing::info!(
                    log.r#type = "canonical",
                    http.method = %method,
                    http.path = %path,
                    http.status_code = response.status().as_u16(),
                    http.latency_ms = latency_ms,
                    "リクエスト完了"
                ),
                Err(err) => tracing::error!(
                    log.r#type = "canonical",
                    http.method = %method,
                    http.path = %path,
                    http.latency_ms = latency_ms,
                    error.message = %err,
                    "リクエスト処理エラー"
                ),
            }

            result
        })
    }
}
