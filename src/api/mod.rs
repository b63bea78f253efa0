//! HTTP interface consumed by the single-page UI
//!
//! One note-generation endpoint plus a health check. CORS is permissive:
//! the page may be served from a different origin than this service.

pub mod health;
pub mod notes;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::AppState;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(notes::notes_routes())
        .merge(health::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::readers::ReaderRegistry;
    use crate::ports::llm::LlmConfig;
    use crate::ports::mocks::MockCompletion;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "test-boundary";

    fn test_state(mock: MockCompletion) -> AppState {
        AppState {
            llm: Arc::new(mock),
            readers: Arc::new(ReaderRegistry::new()),
            llm_config: LlmConfig::default(),
        }
    }

    /// Assemble a multipart/form-data body. A part with a filename becomes
    /// a file part, others are plain text fields.
    fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
        let mut body = String::new();
        for (name, filename, value) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match filename {
                Some(filename) => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                    ));
                    body.push_str("Content-Type: application/octet-stream\r\n");
                }
                None => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"\r\n"
                    ));
                }
            }
            body.push_str("\r\n");
            body.push_str(value);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    fn notes_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/notes")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_notes_end_to_end() {
        let mock = MockCompletion::replying("## Generated Notes");
        let app = build_router(test_state(mock.clone()));

        let response = app
            .oneshot(notes_request(&[
                ("transcript", None, "Discussed budget for FY25."),
                ("meeting_type", None, "Academic Senate"),
                ("meeting_date", None, "03/14/2025"),
                ("detail_level", None, "standard"),
            ]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["notes"], "## Generated Notes");
        assert_eq!(json["meeting_type"], "academic_senate");
        assert_eq!(json["detail_level"], "standard");
        assert_eq!(json["diagnostics"].as_array().unwrap().len(), 0);

        let prompt = mock.last_prompt().unwrap();
        assert!(prompt.user.contains("Discussed budget for FY25."));
        assert!(prompt.user.contains("- Date: 03/14/2025"));
    }

    #[tokio::test]
    async fn test_unsupported_upload_becomes_diagnostic_not_failure() {
        let mock = MockCompletion::replying("notes");
        let app = build_router(test_state(mock));

        let response = app
            .oneshot(notes_request(&[
                ("transcript", None, "Transcript."),
                ("meeting_date", None, "03/14/2025"),
                ("materials", Some("summary.txt"), "plain text upload"),
            ]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let diagnostics = json["diagnostics"].as_array().unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0]["filename"], "summary.txt");
    }

    #[tokio::test]
    async fn test_blank_transcript_is_rejected() {
        let app = build_router(test_state(MockCompletion::replying("notes")));

        let response = app
            .oneshot(notes_request(&[
                ("transcript", None, "   \n  "),
                ("meeting_date", None, "03/14/2025"),
            ]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rate_limited_maps_to_service_unavailable() {
        let app = build_router(test_state(MockCompletion::rate_limited()));

        let response = app
            .oneshot(notes_request(&[
                ("transcript", None, "Transcript."),
                ("meeting_date", None, "03/14/2025"),
            ]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = build_router(test_state(MockCompletion::replying("")));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
