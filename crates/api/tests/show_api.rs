//! HTTP-level integration tests for the `/shows` pages.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_artist, create_venue, get, post_form};
use sqlx::PgPool;

async fn show_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_offers_venues_and_artists(pool: PgPool) {
    let hop = create_venue(&pool, "The Musical Hop").await;
    let petals = create_artist(&pool, "Guns N Petals").await;

    let json = body_json(get(common::build_test_app(pool), "/shows/create").await).await;
    let data = &json["data"];
    assert_eq!(data["venues"][0]["id"], hop);
    assert_eq!(data["artists"][0]["id"], petals);
    // YYYY-MM-DD HH:MM:SS
    assert_eq!(data["start_time"].as_str().unwrap().len(), 19);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_show_and_list(pool: PgPool) {
    let hop = create_venue(&pool, "The Musical Hop").await;
    let petals = create_artist(&pool, "Guns N Petals").await;
    let (hop_id, petals_id) = (hop.to_string(), petals.to_string());

    let fields = [
        ("venue_id", hop_id.as_str()),
        ("artist_id", petals_id.as_str()),
        ("start_time", "2035-04-01 20:00:00"),
    ];
    let response = post_form(common::build_test_app(pool.clone()), "/shows/create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["flash"][0]["level"], "success");
    assert_eq!(json["flash"][0]["message"], "Show was successfully listed!");

    let json = body_json(get(common::build_test_app(pool), "/shows").await).await;
    let show = &json["data"][0];
    assert_eq!(show["venue_id"], hop);
    assert_eq!(show["venue_name"], "The Musical Hop");
    assert_eq!(show["artist_id"], petals);
    assert_eq!(show["artist_name"], "Guns N Petals");
    assert!(show["artist_image_link"].is_string());
    assert_eq!(show["start_time"], "2035-04-01T20:00:00Z");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_show_with_missing_venue_is_rejected(pool: PgPool) {
    let petals = create_artist(&pool, "Guns N Petals").await;
    let petals_id = petals.to_string();

    let fields = [
        ("venue_id", "999999"),
        ("artist_id", petals_id.as_str()),
        ("start_time", "2035-04-01 20:00:00"),
    ];
    let response = post_form(common::build_test_app(pool.clone()), "/shows/create", &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["flash"][0]["level"], "error");
    assert_eq!(json["flash"][0]["message"], "An error occurred. Show could not be listed.");
    // Constraint failures do not expose the cause.
    assert!(json["flash"].get(1).is_none());

    assert_eq!(show_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_show_with_unparsable_time_is_rejected(pool: PgPool) {
    let hop = create_venue(&pool, "The Musical Hop").await.to_string();
    let petals = create_artist(&pool, "Guns N Petals").await.to_string();

    let fields = [
        ("venue_id", hop.as_str()),
        ("artist_id", petals.as_str()),
        ("start_time", "next tuesday"),
    ];
    let response = post_form(common::build_test_app(pool.clone()), "/shows/create", &fields).await;
    let json = body_json(response).await;
    assert_eq!(json["flash"][0]["level"], "error");
    assert!(json["flash"][1]["message"].as_str().unwrap().contains("start time"));

    assert_eq!(show_count(&pool).await, 0);
}
