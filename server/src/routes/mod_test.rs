use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn router() -> Router {
    let missing = Path::new("/nonexistent/portfolio");
    static_routes(&missing.join("site"), &missing.join("assets"))
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let req = Request::builder().uri("/assets/profile.jpeg").body(Body::empty()).unwrap();
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_bundle_is_not_found() {
    let req = Request::builder().uri("/pkg/portfolio.wasm").body(Body::empty()).unwrap();
    let resp = router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
