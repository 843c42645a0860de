//! Request logging middleware.
//!
//! Every request is handled inside a tracing span carrying a UUID, the
//! method, and the path, so the access log correlates all lines for one
//! request and records its status and duration on completion.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that logs every request before and after it is handled.
///
/// This should be the outermost layer so the span covers the whole request.
pub async fn access_log_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        tracing::debug!("Handling request");
        let start = Instant::now();
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}
