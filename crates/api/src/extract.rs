//! Custom extractors.

use axum::extract::{FromRequestParts, OriginalUri, Path};
use axum::http::request::Parts;
use axum::response::Response;
use fyyur_core::types::DbId;

use crate::handlers::errors::page_not_found;
use crate::state::AppState;

/// A record id taken from the `{id}` path segment.
///
/// A segment that is not an integer names no page, so it is rejected with
/// the 404 page rather than a 400.
///
/// ```ignore
/// async fn get_by_id(IdPath(id): IdPath) -> ... { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl FromRequestParts<AppState> for IdPath {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) => {
                let path = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map_or_else(|| parts.uri.path(), |uri| uri.path());
                tracing::debug!(%path, error = %rejection, "Id segment is not a record id");
                Err(page_not_found(path))
            }
        }
    }
}
