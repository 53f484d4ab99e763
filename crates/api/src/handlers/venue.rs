//! Handlers for the `/venues` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use axum_extra::extract::{Form as MultiForm, FormRejection};
use chrono::Utc;
use fyyur_core::choices::FormChoices;
use fyyur_core::directory::{group_by_area, Area};
use fyyur_core::error::CoreError;
use fyyur_core::search::SearchResults;
use fyyur_core::types::DbId;
use fyyur_db::models::venue::{Venue, VenueDetail, VenueSummary};
use fyyur_db::repositories::{ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::flash::Flash;
use crate::forms::{SearchForm, VenueForm};
use crate::handlers::{failure_page, log_failure, not_found_page};
use crate::response::{DataResponse, EditPage, FormPage, HomePage, PageOutcome, SearchPage};
use crate::state::AppState;

/// GET /venues
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Area<VenueSummary>>>>> {
    let now = Utc::now();
    let summaries = VenueRepo::list_summaries(&state.pool, now).await?;
    Ok(Json(DataResponse {
        data: group_by_area(summaries),
    }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Json<DataResponse<SearchPage>>> {
    let now = Utc::now();
    let matches = VenueRepo::search_by_name(&state.pool, &form.search_term, now).await?;
    Ok(Json(DataResponse {
        data: SearchPage {
            search_term: form.search_term,
            results: SearchResults::new(matches),
        },
    }))
}

/// GET /venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<PageOutcome<VenueDetail>> {
    let now = Utc::now();
    let Some(venue) = VenueRepo::find_by_id(&state.pool, id).await? else {
        return Ok(PageOutcome::Home(not_found_page("Venue", id)));
    };
    let shows = ShowRepo::list_for_venue(&state.pool, id).await?;
    Ok(PageOutcome::Page(VenueDetail::new(venue, shows, now)))
}

/// GET /venues/create
pub async fn create_form() -> Json<DataResponse<FormPage>> {
    Json(DataResponse {
        data: FormPage {
            choices: FormChoices::default(),
        },
    })
}

/// POST /venues/create
pub async fn create(
    State(state): State<AppState>,
    form: Result<MultiForm<VenueForm>, FormRejection>,
) -> HomePage {
    let form = match form {
        Ok(MultiForm(form)) => form,
        Err(rejection) => {
            let err = AppError::BadRequest(rejection.to_string());
            log_failure("create venue", &err);
            return failure_page("An error occurred. Venue could not be listed.".to_string(), &err);
        }
    };

    let name = form.name.trim().to_string();
    match insert(&state, form).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");
            HomePage::with_flash(Flash::success(format!(
                "Venue {} was successfully listed!",
                venue.name
            )))
        }
        Err(err) => {
            log_failure("create venue", &err);
            failure_page(
                format!("An error occurred. Venue {name} could not be listed."),
                &err,
            )
        }
    }
}

async fn insert(state: &AppState, form: VenueForm) -> AppResult<Venue> {
    let input = form.into_input()?;
    Ok(VenueRepo::create(&state.pool, &input).await?)
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<PageOutcome<EditPage<VenueForm>>> {
    let Some(venue) = VenueRepo::find_by_id(&state.pool, id).await? else {
        return Ok(PageOutcome::Home(not_found_page("Venue", id)));
    };
    Ok(PageOutcome::Page(EditPage {
        values: VenueForm::from(venue),
        choices: FormChoices::default(),
    }))
}

/// POST /venues/{id}/edit
///
/// Always redirects to the detail page; a failed edit leaves the venue as
/// it was.
pub async fn edit(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    form: Result<MultiForm<VenueForm>, FormRejection>,
) -> Redirect {
    match overwrite(&state, id, form).await {
        Ok(venue) => tracing::info!(venue_id = venue.id, "Venue updated"),
        Err(err) => log_failure("edit venue", &err),
    }
    Redirect::to(&format!("/venues/{id}"))
}

async fn overwrite(
    state: &AppState,
    id: DbId,
    form: Result<MultiForm<VenueForm>, FormRejection>,
) -> AppResult<Venue> {
    let MultiForm(form) = form.map_err(|r| AppError::BadRequest(r.to_string()))?;
    let input = form.into_input()?;
    VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id,
        }))
}

/// DELETE /venues/{id}
///
/// Answers 204 whether or not the venue existed or the delete succeeded.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> StatusCode {
    match VenueRepo::delete(&state.pool, id).await {
        Ok(true) => tracing::info!(venue_id = id, "Venue deleted"),
        Ok(false) => tracing::debug!(venue_id = id, "Venue to delete was already gone"),
        Err(err) => log_failure("delete venue", &AppError::Database(err)),
    }
    StatusCode::NO_CONTENT
}
