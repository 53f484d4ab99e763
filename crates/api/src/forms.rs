//! Submitted form and JSON bodies, and their conversion into validated
//! repository inputs.
//!
//! Every field arrives as text (or is absent). Conversion trims, drops blank
//! optionals and checks required fields, so the repositories only ever see
//! clean input.

use fyyur_core::error::CoreError;
use fyyur_core::genres::{GenreInput, GenreList};
use fyyur_core::schedule::parse_start_time;
use fyyur_core::validation::{
    optional, optional_link, parse_checkbox, parse_id, required, MAX_DESCRIPTION_LENGTH,
    MAX_FIELD_LENGTH, MAX_NAME_LENGTH,
};
use fyyur_db::models::artist::{Artist, ArtistInput};
use fyyur_db::models::show::CreateShow;
use fyyur_db::models::venue::{Venue, VenueInput};
use serde::{Deserialize, Serialize};

/// Value a ticked checkbox carries when a form is prefilled.
const CHECKBOX_ON: &str = "y";

fn genre_list<I, S>(genres: I) -> Result<GenreList, CoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    GenreList::new(genres).map_err(CoreError::Validation)
}

fn checkbox_value(ticked: bool) -> Option<String> {
    ticked.then(|| CHECKBOX_ON.to_string())
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// URL-encoded venue form, used by both create and edit.
///
/// `genres` may be sent as repeated `genres` keys or as `genres[]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    pub phone: Option<String>,
    #[serde(default, alias = "genres[]")]
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn into_input(self) -> Result<VenueInput, CoreError> {
        Ok(VenueInput {
            name: required("name", &self.name, MAX_NAME_LENGTH)?,
            genres: genre_list(&self.genres)?,
            address: required("address", &self.address, MAX_FIELD_LENGTH)?,
            city: required("city", &self.city, MAX_FIELD_LENGTH)?,
            state: required("state", &self.state, MAX_FIELD_LENGTH)?,
            phone: optional("phone", self.phone.as_deref(), MAX_FIELD_LENGTH)?,
            website_link: optional_link("website_link", self.website_link.as_deref())?,
            facebook_link: optional_link("facebook_link", self.facebook_link.as_deref())?,
            image_link: optional_link("image_link", self.image_link.as_deref())?,
            seeking_talent: parse_checkbox(self.seeking_talent.as_deref()),
            seeking_description: optional(
                "seeking_description",
                self.seeking_description.as_deref(),
                MAX_DESCRIPTION_LENGTH,
            )?,
        })
    }
}

impl From<Venue> for VenueForm {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            genres: venue.genres,
            facebook_link: venue.facebook_link,
            website_link: venue.website_link,
            image_link: Some(venue.image_link),
            seeking_talent: checkbox_value(venue.seeking_talent),
            seeking_description: venue.seeking_description,
        }
    }
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

/// URL-encoded artist edit form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub phone: Option<String>,
    #[serde(default, alias = "genres[]")]
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn into_input(self) -> Result<ArtistInput, CoreError> {
        Ok(ArtistInput {
            name: required("name", &self.name, MAX_NAME_LENGTH)?,
            genres: genre_list(&self.genres)?,
            city: required("city", &self.city, MAX_FIELD_LENGTH)?,
            state: required("state", &self.state, MAX_FIELD_LENGTH)?,
            phone: optional("phone", self.phone.as_deref(), MAX_FIELD_LENGTH)?,
            image_link: optional_link("image_link", self.image_link.as_deref())?,
            facebook_link: optional_link("facebook_link", self.facebook_link.as_deref())?,
            website_link: optional_link("website_link", self.website_link.as_deref())?,
            seeking_venue: parse_checkbox(self.seeking_venue.as_deref()),
            seeking_description: optional(
                "seeking_description",
                self.seeking_description.as_deref(),
                MAX_DESCRIPTION_LENGTH,
            )?,
        })
    }
}

impl From<Artist> for ArtistForm {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            facebook_link: artist.facebook_link,
            website_link: artist.website_link,
            image_link: Some(artist.image_link),
            seeking_venue: checkbox_value(artist.seeking_venue),
            seeking_description: artist.seeking_description,
        }
    }
}

/// JSON body of `POST /artists/create`.
///
/// `genres` is accepted as a list or as a comma-joined string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArtistRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: GenreInput,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

impl CreateArtistRequest {
    pub fn into_input(self) -> Result<ArtistInput, CoreError> {
        Ok(ArtistInput {
            name: required("name", &self.name, MAX_NAME_LENGTH)?,
            genres: self
                .genres
                .into_genre_list()
                .map_err(CoreError::Validation)?,
            city: required("city", &self.city, MAX_FIELD_LENGTH)?,
            state: required("state", &self.state, MAX_FIELD_LENGTH)?,
            phone: optional("phone", self.phone.as_deref(), MAX_FIELD_LENGTH)?,
            image_link: optional_link("image_link", self.image_link.as_deref())?,
            facebook_link: optional_link("facebook_link", self.facebook_link.as_deref())?,
            website_link: optional_link("website_link", self.website_link.as_deref())?,
            seeking_venue: self.seeking_venue.unwrap_or(false),
            seeking_description: optional(
                "seeking_description",
                self.seeking_description.as_deref(),
                MAX_DESCRIPTION_LENGTH,
            )?,
        })
    }
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// URL-encoded show form. Ids arrive as text from select widgets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    pub fn into_input(self) -> Result<CreateShow, CoreError> {
        Ok(CreateShow {
            venue_id: parse_id("venue_id", &self.venue_id)?,
            artist_id: parse_id("artist_id", &self.artist_id)?,
            start_time: parse_start_time(&self.start_time).map_err(CoreError::Validation)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
