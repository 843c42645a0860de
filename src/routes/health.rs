//! Health page handler.
//!
//! Answers `GET /` with the fixed success page plus whatever instance
//! metadata is currently available. Metadata is fetched fresh on every
//! request so the page always identifies the host actually serving it.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::config::{HEALTH_PAGE_TITLE, METADATA_HEADING, METADATA_UNAVAILABLE};
use crate::error::AppError;
use crate::state::AppState;
use crate::templates::HEALTH_TEMPLATE;

/// Health page handler for `GET /`.
///
/// Always reports success; a failed metadata fetch only downgrades the
/// metadata section to the fallback text, never the response itself.
#[instrument(name = "health::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let metadata = match state.metadata.fetch_snapshot().await {
        Ok(snapshot) => snapshot.to_html(),
        Err(err) => {
            tracing::debug!(error = %err, "Instance metadata unavailable");
            METADATA_UNAVAILABLE.to_string()
        }
    };

    let content = format!("<h1>Success</h1>{}{}", METADATA_HEADING, metadata);

    let mut context = tera::Context::new();
    context.insert("title", HEALTH_PAGE_TITLE);
    context.insert("content", &content);

    let html = state.tera.render(HEALTH_TEMPLATE, &context)?;
    Ok(Html(html))
}
