pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   home page
/// /venues                             list (grouped by area)
///   /search                           search by name
///   /create                           form, create
///   /{id}                             detail, delete
///   /{id}/edit                        form, edit
/// /artists                            list
///   /search                           search by name
///   /create                           form, create (JSON)
///   /{id}                             detail, delete
///   /{id}/edit                        form, edit
/// /shows                              list
///   /create                           form, create
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
