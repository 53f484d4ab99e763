//! Repository for the `venues` table.

use fyyur_core::search::contains_pattern;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::summary::{ListingRef, ListingSummary};
use crate::models::venue::{Venue, VenueInput, VenueSummary, DEFAULT_VENUE_IMAGE_LINK};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, address, city, state, phone, website_link, \
    facebook_link, image_link, seeking_talent, seeking_description, created_at, updated_at";

/// Provides CRUD and listing queries for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue inside a transaction, returning the committed row.
    pub async fn create(pool: &PgPool, input: &VenueInput) -> Result<Venue, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO venues
                (name, genres, address, city, state, phone, website_link,
                 facebook_link, image_link, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(input.genres.as_slice())
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website_link)
            .bind(&input.facebook_link)
            .bind(input.image_link.as_deref().unwrap_or(DEFAULT_VENUE_IMAGE_LINK))
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every venue with its count of shows starting after `now`.
    ///
    /// Ordered by state, city, then name, so grouping the result by area
    /// yields a stable directory.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(
            "SELECT v.id, v.name, v.city, v.state,
                    COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
             FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             GROUP BY v.id
             ORDER BY v.state, v.city, v.name, v.id",
        )
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on venue name. An empty term
    /// matches every venue.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ListingSummary>, sqlx::Error> {
        sqlx::query_as::<_, ListingSummary>(
            r"SELECT v.id, v.name,
                    COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
             FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             WHERE v.name ILIKE $1 ESCAPE '\'
             GROUP BY v.id
             ORDER BY v.name, v.id",
        )
        .bind(contains_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Id and name of every venue, ordered by name.
    pub async fn list_refs(pool: &PgPool) -> Result<Vec<ListingRef>, sqlx::Error> {
        sqlx::query_as::<_, ListingRef>("SELECT id, name FROM venues ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// The most recently listed venues, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<ListingRef>, sqlx::Error> {
        sqlx::query_as::<_, ListingRef>(
            "SELECT id, name FROM venues ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Overwrite the editable fields of a venue in one statement.
    ///
    /// `image_link` is only replaced when provided. Returns `None` if no row
    /// with the given `id` exists, in which case nothing is written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VenueInput,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE venues SET
                name = $2,
                genres = $3,
                address = $4,
                city = $5,
                state = $6,
                phone = $7,
                website_link = $8,
                facebook_link = $9,
                image_link = COALESCE($10, image_link),
                seeking_talent = $11,
                seeking_description = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.genres.as_slice())
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website_link)
            .bind(&input.facebook_link)
            .bind(&input.image_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Delete a venue and, by cascade, its shows. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of venues.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
