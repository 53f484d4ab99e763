//! Artist entity model, DTOs and view models.

use fyyur_core::genres::GenreList;
use fyyur_core::schedule::ShowPartition;
use fyyur_core::types::{DbId, Timestamp};
use fyyur_core::validation::normalize_optional;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::show::ArtistShow;

/// Image shown for artists that were listed without one.
pub const DEFAULT_ARTIST_IMAGE_LINK: &str = "https://images.unsplash.com/photo-1549213783-8284d0336c4f?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=300&q=80";

/// An artist row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated artist fields for create and full-overwrite update.
///
/// `image_link: None` means the default image on create and "keep the
/// current image" on update.
#[derive(Debug, Clone)]
pub struct ArtistInput {
    pub name: String,
    pub genres: GenreList,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Artist detail page: the artist plus its shows split at `now`.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    #[serde(flatten)]
    pub shows: ShowPartition<ArtistShow>,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: Vec<ArtistShow>, now: Timestamp) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: normalize_optional(artist.phone.as_deref()),
            website_link: normalize_optional(artist.website_link.as_deref()),
            facebook_link: normalize_optional(artist.facebook_link.as_deref()),
            seeking_venue: artist.seeking_venue,
            seeking_description: normalize_optional(artist.seeking_description.as_deref()),
            image_link: artist.image_link,
            shows: ShowPartition::split(shows, now),
        }
    }
}
