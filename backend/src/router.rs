use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::site::Config;
use crate::handlers::quote_handlers;

async fn health() -> &'static str {
    "OK"
}

/// API routes plus the built site. Paths with no matching file get the
/// index document so client-side routes survive a reload.
pub fn app(config: &Config) -> Router {
    let site = ServeDir::new(config.dist_dir()).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/api/health", get(health))
        .route("/api/quote", post(quote_handlers::submit_quote))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>roofcare</body></html>";

    fn site() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
        let config = Config::from_values(Some(dir.path().display().to_string()), None).unwrap();
        (dir, config)
    }

    async fn get_body(config: &Config, uri: &str) -> (StatusCode, String) {
        let response = app(config)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (_dir, config) = site();
        assert_eq!(get_body(&config, "/api/health").await, (StatusCode::OK, "OK".to_string()));
    }

    #[tokio::test]
    async fn client_routes_get_the_index_document() {
        let (_dir, config) = site();
        for uri in ["/", "/services/roof-repairs", "/areas/nowhere", "/privacy-policy"] {
            let (status, body) = get_body(&config, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, INDEX, "{uri}");
        }
    }

    #[tokio::test]
    async fn static_files_are_served_as_is() {
        let (_dir, config) = site();
        let (status, body) = get_body(&config, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('hi');");
    }

    #[tokio::test]
    async fn incomplete_quote_is_rejected() {
        let (_dir, config) = site();
        let response = app(&config)
            .oneshot(
                Request::post("/api/quote")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Jo"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["ok"], false);
        assert!(json["missing"].as_array().unwrap().iter().any(|f| f == "postcode"));
    }

    #[tokio::test]
    async fn complete_quote_is_accepted() {
        let (_dir, config) = site();
        let body = serde_json::json!({
            "name": "Jo Bloggs", "email": "jo@example.com", "phone": "07700 900123",
            "postcode": "SO14 1AA", "service": "roof-repairs", "propertyType": "terraced",
            "roofType": "pitched-tiled", "message": "", "subject": "New quote request from Jo Bloggs"
        });
        let response = app(&config)
            .oneshot(
                Request::post("/api/quote")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
