//! Handler for the landing page.

use axum::extract::State;
use fyyur_db::repositories::{ArtistRepo, VenueRepo};

use crate::error::AppResult;
use crate::response::{HomePage, RecentListings};
use crate::state::AppState;

/// How many recently listed venues and artists the home page shows.
pub const RECENT_LIMIT: i64 = 10;

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<HomePage> {
    let venues = VenueRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    let artists = ArtistRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    Ok(HomePage::new(Some(RecentListings { venues, artists })))
}
