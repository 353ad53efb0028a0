//! Full-stack checks through [`app_router`], including path normalization
//! and the JSON fallback.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use corebox_login::routes::app_router;
use tower::ServiceExt;

async fn get(uri: &str) -> Response {
    app_router("static")
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_login_route() {
    let response = get("/login").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(">Sign in</button>"));
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let response = get("/login/").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_route() {
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let response = get("/static/css/app.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/css"));
    assert!(body_text(response).await.contains(".btn-primary"));
}

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let response = get("/dashboard").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/dashboard");
}
