//! Behaviour when the database cannot be reached.
//!
//! The pool points at a closed port, so every acquire fails well inside the
//! request timeout and the handlers answer for themselves.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{artist_json, body_json, get, post_form, post_json, venue_fields};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://fyyur@127.0.0.1:1/fyyur")
        .unwrap()
}

#[tokio::test]
async fn test_create_venue_without_database_flashes_failure() {
    let response = post_form(
        common::build_test_app(unreachable_pool()),
        "/venues/create",
        &venue_fields("The Musical Hop"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["page"], "home");
    assert_eq!(json["flash"].as_array().unwrap().len(), 1);
    assert_eq!(json["flash"][0]["level"], "error");
    assert_eq!(
        json["flash"][0]["message"],
        "An error occurred. Venue The Musical Hop could not be listed."
    );
}

#[tokio::test]
async fn test_create_artist_without_database_reports_failure() {
    let response = post_json(
        common::build_test_app(unreachable_pool()),
        "/artists/create",
        artist_json("Guns N Petals"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "failed"}));
}

#[tokio::test]
async fn test_list_venues_without_database_is_503() {
    let response = get(common::build_test_app(unreachable_pool()), "/venues").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["code"], "SERVICE_UNAVAILABLE");
}
