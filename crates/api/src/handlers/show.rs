//! Handlers for the `/shows` resource.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::{Form, Json};
use chrono::Utc;
use fyyur_core::schedule::format_for_form;
use fyyur_db::models::show::{Show, ShowListing};
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::flash::Flash;
use crate::forms::ShowForm;
use crate::handlers::{failure_page, log_failure};
use crate::response::{DataResponse, HomePage, ShowFormPage};
use crate::state::AppState;

const FAILURE_MESSAGE: &str = "An error occurred. Show could not be listed.";

/// GET /shows
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ShowListing>>>> {
    let shows = ShowRepo::list_listings(&state.pool).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// GET /shows/create
pub async fn create_form(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ShowFormPage>>> {
    let venues = VenueRepo::list_refs(&state.pool).await?;
    let artists = ArtistRepo::list_refs(&state.pool).await?;
    Ok(Json(DataResponse {
        data: ShowFormPage {
            start_time: format_for_form(Utc::now()),
            venues,
            artists,
        },
    }))
}

/// POST /shows/create
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<ShowForm>, FormRejection>,
) -> HomePage {
    match insert(&state, form).await {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                "Show created"
            );
            HomePage::with_flash(Flash::success("Show was successfully listed!"))
        }
        Err(err) => {
            log_failure("create show", &err);
            failure_page(FAILURE_MESSAGE.to_string(), &err)
        }
    }
}

async fn insert(state: &AppState, form: Result<Form<ShowForm>, FormRejection>) -> AppResult<Show> {
    let Form(form) = form.map_err(|r| AppError::BadRequest(r.body_text()))?;
    let input = form.into_input()?;
    Ok(ShowRepo::create(&state.pool, &input).await?)
}
