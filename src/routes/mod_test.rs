use super::*;

use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

async fn get_status(uri: &str) -> (StatusCode, Option<String>) {
    let resp = host_routes()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    (resp.status(), location)
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = get_status("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn signup_redirects_to_login_in_signup_mode() {
    let (status, location) = get_status("/signup").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/login?signup=1"));
}

#[tokio::test]
async fn unknown_host_route_is_not_found() {
    let (status, _) = get_status("/api/auth/login").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
