#![allow(dead_code, reason = "not every test binary uses every helper")]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use relay_api_rest::RestServer;
use relay_core_contact_contracts::ContactService;
use relay_core_contact_contracts::MockContactService;
use relay_core_health_contracts::{HealthService, MockHealthService};
use serde_json::Value;
use tower::ServiceExt;

pub fn router(health: impl HealthService, contact: impl ContactService) -> Router {
    RestServer::new(health, contact).router()
}

pub fn contact_router(contact: impl ContactService) -> Router {
    router(MockHealthService::new(), contact)
}

pub fn health_router(health: impl HealthService) -> Router {
    router(health, MockContactService::new())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(router: Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(router, request).await
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
