//! Middleware that stamps the site-wide security headers onto every response.
//!
//! Handlers can still set their own value for any of these headers; the
//! layer only fills in what is missing.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    response::Response,
};
use tower::{Layer, Service};

pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("x-dns-prefetch-control", "on"),
    ("x-frame-options", "SAMEORIGIN"),
];

#[derive(Clone)]
pub struct SecurityHeadersLayer;

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeadersService<S>;

    fn layer(&self, service: S) -> Self::Service {
        SecurityHeadersService { inner: service }
    }
}

#[derive(Clone)]
pub struct SecurityHeadersService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for SecurityHeadersService<S>
where
    S: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let future = self.inner.call(req);

        Box::pin(async move {
            let mut response = future.await?;
            let headers = response.headers_mut();
            for &(name, value) in SECURITY_HEADERS {
                headers
                    .entry(HeaderName::from_static(name))
                    .or_insert_with(|| HeaderValue::from_static(value));
            }
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .route(
                "/framed",
                get(|| async { ([("x-frame-options", "DENY")], "framed") }),
            )
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(SecurityHeadersLayer)
    }

    async fn request(uri: &str) -> Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn headers_added_to_success() {
        let response = request("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-dns-prefetch-control"], "on");
        assert_eq!(response.headers()["x-frame-options"], "SAMEORIGIN");
    }

    #[tokio::test]
    async fn headers_added_to_not_found() {
        let response = request("/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-frame-options"], "SAMEORIGIN");
    }

    #[tokio::test]
    async fn handler_value_wins() {
        let response = request("/framed").await;
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert_eq!(response.headers()["x-dns-prefetch-control"], "on");
    }
}
