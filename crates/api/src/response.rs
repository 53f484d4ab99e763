//! Shared response envelope types and page view models.
//!
//! Page endpoints answer with a `{ "data": ... }` envelope. Actions that fall
//! back to the landing page answer with [`HomePage`] instead, carrying the
//! flash notices for that request.

use axum::response::{IntoResponse, Response};
use axum::Json;
use fyyur_core::choices::FormChoices;
use fyyur_core::search::SearchResults;
use fyyur_db::models::summary::{ListingRef, ListingSummary};
use serde::Serialize;

use crate::flash::Flash;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Venues and artists most recently added to the directory.
#[derive(Debug, Serialize)]
pub struct RecentListings {
    pub venues: Vec<ListingRef>,
    pub artists: Vec<ListingRef>,
}

/// The landing page.
///
/// `recent` is only filled in for a plain `GET /`; fallbacks from other
/// actions carry the notices alone.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub page: &'static str,
    pub flash: Vec<Flash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent: Option<RecentListings>,
}

impl HomePage {
    pub fn new(recent: Option<RecentListings>) -> Self {
        Self {
            page: "home",
            flash: Vec::new(),
            recent,
        }
    }

    /// Home page carrying a single notice.
    pub fn with_flash(flash: Flash) -> Self {
        Self {
            page: "home",
            flash: vec![flash],
            recent: None,
        }
    }
}

impl IntoResponse for HomePage {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Either the requested page or the home page with a notice explaining why
/// the requested page could not be shown.
#[derive(Debug)]
pub enum PageOutcome<T: Serialize> {
    Page(T),
    Home(HomePage),
}

impl<T: Serialize> IntoResponse for PageOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            PageOutcome::Page(data) => Json(DataResponse { data }).into_response(),
            PageOutcome::Home(home) => home.into_response(),
        }
    }
}

/// Search results together with the term that produced them.
#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub search_term: String,
    pub results: SearchResults<ListingSummary>,
}

/// An empty create form: the selectable genres and states.
#[derive(Debug, Serialize)]
pub struct FormPage {
    pub choices: FormChoices,
}

/// An edit form prefilled with the record's current values.
#[derive(Debug, Serialize)]
pub struct EditPage<T: Serialize> {
    pub values: T,
    pub choices: FormChoices,
}

/// The show form: a default start time and the venues and artists to pick from.
#[derive(Debug, Serialize)]
pub struct ShowFormPage {
    pub start_time: String,
    pub venues: Vec<ListingRef>,
    pub artists: Vec<ListingRef>,
}

/// Outcome of a JSON submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: SubmissionStatus,
}

impl IntoResponse for SubmissionStatus {
    fn into_response(self) -> Response {
        Json(StatusResponse { status: self }).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_fallback_omits_recent_listings() {
        let json = serde_json::to_value(HomePage::with_flash(Flash::info("hi"))).unwrap();
        assert_eq!(json["page"], "home");
        assert_eq!(json["flash"][0]["message"], "hi");
        assert!(json.get("recent").is_none());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_value(StatusResponse {
            status: SubmissionStatus::Failed,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "status": "failed" }));
    }
}
