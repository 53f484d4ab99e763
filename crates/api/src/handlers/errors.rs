//! Error pages for unknown routes and panicking handlers.

use std::any::Any;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Fallback for any path no route matches.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(%uri, "No route matched");
    page_not_found(uri.path())
}

/// The 404 page for `path`.
pub fn page_not_found(path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("No page at {path}"),
            "code": "NOT_FOUND",
        })),
    )
        .into_response()
}

/// Turn a handler panic into a 500 JSON page.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        })),
    )
        .into_response()
}
