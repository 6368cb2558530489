//! 访问日志中间件
//!
//! 每个请求完成时记录一行日志。营业状态取决于参考时间，
//! 所以同时记录 `at` 与 `strict` 查询参数以及路径参数 (商家 ID、用户 ID)，
//! 可以据此复现某次计算。

use std::time::Instant;

use axum::{
    RequestExt,
    extract::{MatchedPath, Query, RawPathParams, Request},
    middleware::Next,
    response::Response,
};
use http::Uri;
use serde::Deserialize;
use tower_http::request_id::RequestId;

/// Query parameters that change a computed status
#[derive(Debug, Default, PartialEq, Deserialize)]
struct Evaluation {
    at: Option<String>,
    strict: Option<String>,
}

impl Evaluation {
    fn from_uri(uri: &Uri) -> Self {
        Query::<Self>::try_from_uri(uri)
            .map(|Query(evaluation)| evaluation)
            .unwrap_or_default()
    }
}

/// `id=7`, `user_id=u1`; empty for routes without parameters
fn path_params(params: &RawPathParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(",")
}

pub async fn access_log(mut req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_string();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path().to_string(), |p| p.as_str().to_string());
    let evaluation = Evaluation::from_uri(req.uri());
    let params = req
        .extract_parts::<RawPathParams>()
        .await
        .map(|params| path_params(&params))
        .unwrap_or_default();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis();

    macro_rules! access {
        ($level:ident) => {
            tracing::$level!(
                request_id = %request_id,
                method = %method,
                route = %route,
                params = %params,
                at = evaluation.at.as_deref().unwrap_or("now"),
                strict = evaluation.strict.as_deref().unwrap_or("false"),
                status,
                latency_ms = %latency_ms,
                "Request handled"
            )
        };
    }

    if response.status().is_server_error() {
        access!(error);
    } else if response.status().is_client_error() {
        access!(warn);
    } else {
        access!(info);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_from_status_query() {
        let uri: Uri = "/api/shops/1/status?at=2026-01-05T20:45&strict=true"
            .parse()
            .unwrap();
        assert_eq!(
            Evaluation::from_uri(&uri),
            Evaluation {
                at: Some("2026-01-05T20:45".to_string()),
                strict: Some("true".to_string()),
            }
        );
    }

    #[test]
    fn test_evaluation_defaults_to_now() {
        let uri: Uri = "/api/shops".parse().unwrap();
        assert_eq!(Evaluation::from_uri(&uri), Evaluation::default());

        let uri: Uri = "/api/shops?open_now=true&kind=retail".parse().unwrap();
        assert_eq!(Evaluation::from_uri(&uri), Evaluation::default());
    }
}
