use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware for HTTP request logging
///
/// Logs method, path, status, duration (ms) and response size (bytes).
/// Server errors are logged at `warn`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Read the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} in {}ms, body unreadable: {}",
                method,
                uri.path(),
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let duration = start.elapsed().as_millis();
    if parts.status.is_server_error() {
        tracing::warn!(
            "{} {} -> {} in {}ms ({} bytes)",
            method,
            uri.path(),
            status,
            duration,
            bytes.len()
        );
    } else {
        tracing::info!(
            "{} {} -> {} in {}ms ({} bytes)",
            method,
            uri.path(),
            status,
            duration,
            bytes.len()
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
