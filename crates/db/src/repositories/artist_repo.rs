//! Repository for the `artists` table.

use fyyur_core::search::contains_pattern;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistInput, DEFAULT_ARTIST_IMAGE_LINK};
use crate::models::summary::{ListingRef, ListingSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, city, state, phone, image_link, facebook_link, \
    website_link, seeking_venue, seeking_description, created_at, updated_at";

/// Provides CRUD and listing queries for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist inside a transaction, returning the committed row.
    pub async fn create(pool: &PgPool, input: &ArtistInput) -> Result<Artist, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO artists
                (name, genres, city, state, phone, image_link, facebook_link,
                 website_link, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(input.genres.as_slice())
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(input.image_link.as_deref().unwrap_or(DEFAULT_ARTIST_IMAGE_LINK))
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every artist with its count of shows starting after `now`, by name.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<ListingSummary>, sqlx::Error> {
        sqlx::query_as::<_, ListingSummary>(
            "SELECT a.id, a.name,
                    COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
             FROM artists a
             LEFT JOIN shows s ON s.artist_id = a.id
             GROUP BY a.id
             ORDER BY a.name, a.id",
        )
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on artist name. An empty term
    /// matches every artist.
    pub async fn search_by_name(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ListingSummary>, sqlx::Error> {
        sqlx::query_as::<_, ListingSummary>(
            r"SELECT a.id, a.name,
                    COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
             FROM artists a
             LEFT JOIN shows s ON s.artist_id = a.id
             WHERE a.name ILIKE $1 ESCAPE '\'
             GROUP BY a.id
             ORDER BY a.name, a.id",
        )
        .bind(contains_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Id and name of every artist, ordered by name.
    pub async fn list_refs(pool: &PgPool) -> Result<Vec<ListingRef>, sqlx::Error> {
        sqlx::query_as::<_, ListingRef>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// The most recently listed artists, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<ListingRef>, sqlx::Error> {
        sqlx::query_as::<_, ListingRef>(
            "SELECT id, name FROM artists ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Overwrite the editable fields of an artist in one statement.
    ///
    /// Returns `None` if no row with the given `id` exists, in which case
    /// nothing is written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArtistInput,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE artists SET
                name = $2,
                genres = $3,
                city = $4,
                state = $5,
                phone = $6,
                image_link = COALESCE($7, image_link),
                facebook_link = $8,
                website_link = $9,
                seeking_venue = $10,
                seeking_description = $11,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.genres.as_slice())
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Delete an artist and, by cascade, its shows. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of artists.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artists")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
