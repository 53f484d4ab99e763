//! Venue entity model, DTOs and view models.

use fyyur_core::directory::Located;
use fyyur_core::genres::GenreList;
use fyyur_core::schedule::ShowPartition;
use fyyur_core::types::{DbId, Timestamp};
use fyyur_core::validation::normalize_optional;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::show::VenueShow;

/// Image shown for venues that were listed without one.
pub const DEFAULT_VENUE_IMAGE_LINK: &str = "https://images.unsplash.com/photo-1543900694-133f37abaaa5?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=400&q=60";

/// A venue row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated venue fields, used both to create a venue and to overwrite
/// the editable fields of an existing one.
///
/// `image_link: None` means the default image on create and "keep the
/// current image" on update.
#[derive(Debug, Clone)]
pub struct VenueInput {
    pub name: String,
    pub genres: GenreList,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// A venue in the grouped directory listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub city: String,
    #[serde(skip_serializing)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl Located for VenueSummary {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// Venue detail page: the venue plus its shows split at `now`.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    #[serde(flatten)]
    pub shows: ShowPartition<VenueShow>,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: Vec<VenueShow>, now: Timestamp) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: normalize_optional(venue.phone.as_deref()),
            website_link: normalize_optional(venue.website_link.as_deref()),
            facebook_link: normalize_optional(venue.facebook_link.as_deref()),
            seeking_talent: venue.seeking_talent,
            seeking_description: normalize_optional(venue.seeking_description.as_deref()),
            image_link: venue.image_link,
            shows: ShowPartition::split(shows, now),
        }
    }
}
