use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, system};

/// Configure every route of the application
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Case identifiers
        .route("/api/case-id", post(handlers::case_id::issue))
        .route("/api/case-id/:id", get(handlers::case_id::get_parts))
        .route(
            "/api/case-id/:id/validate",
            get(handlers::case_id::validate_id),
        )
        .route(
            "/api/case-id/:id/short-url",
            get(handlers::case_id::get_short_url),
        )
        // Reference data
        .route("/api/case-types", get(handlers::reference::list_case_types))
        .route("/api/districts", get(handlers::reference::list_districts))
        .route(
            "/api/case-sequences",
            get(handlers::reference::list_sequences),
        )
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::case_sequence::{allocator, InMemorySequenceAllocator};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::domain::case_id::dto::{
        IssueCaseIdResponse, ParseCaseIdResponse, ValidateCaseIdResponse,
    };
    use contracts::domain::case_id::validate;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_issue_over_http() {
        let _ = allocator::install(Arc::new(InMemorySequenceAllocator::new()));

        let (status, body) = send(post_json(
            "/api/case-id",
            r#"{"caseType":"GRV","district":"SPSR Nellore","year":2025}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let issued: IssueCaseIdResponse = serde_json::from_slice(&body).unwrap();
        assert!(issued.id.starts_with("GRV-AP-NLR-2025-"));
        assert!(validate(&issued.id));
        assert_eq!(issued.parts.district_code, "NLR");

        let (status, _) = send(post_json(
            "/api/case-id",
            r#"{"caseType":"NOPE","district":"SPSR Nellore"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(post_json(
            "/api/case-id",
            r#"{"caseType":"GRV","district":"SPSR Nellore","year":12345}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_id_path_routes() {
        let (status, body) = send(get("/api/case-id/GRV-AP-NLR-2025-000318-0M")).await;
        assert_eq!(status, StatusCode::OK);
        let parsed: ParseCaseIdResponse = serde_json::from_slice(&body).unwrap();
        assert!(parsed.valid);
        assert_eq!(parsed.parts.sequence, 318);

        let (status, _) = send(get("/api/case-id/not-a-case-id")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(get("/api/case-id/not-a-case-id/short-url")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(get("/api/case-id/GRV-AP-NLR-2025-000318-0A/validate")).await;
        assert_eq!(status, StatusCode::OK);
        let checked: ValidateCaseIdResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(checked.id, "GRV-AP-NLR-2025-000318-0A");
        assert!(!checked.valid);
    }

    #[tokio::test]
    async fn test_health_and_unknown_route() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");

        let (status, _) = send(get("/api/nothing-here")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
