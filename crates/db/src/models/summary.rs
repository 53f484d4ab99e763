//! Compact listing rows shared by venues and artists.

use fyyur_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A venue or artist with its upcoming-show count, as shown in lists and
/// search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListingSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Id and name only. Used for select options and "recently listed".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListingRef {
    pub id: DbId,
    pub name: String,
}
