//! Handlers for the `/artists` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use axum_extra::extract::{Form as MultiForm, FormRejection};
use chrono::Utc;
use fyyur_core::choices::FormChoices;
use fyyur_core::error::CoreError;
use fyyur_core::search::SearchResults;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::{Artist, ArtistDetail};
use fyyur_db::models::summary::ListingSummary;
use fyyur_db::repositories::{ArtistRepo, ShowRepo};

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::forms::{ArtistForm, CreateArtistRequest, SearchForm};
use crate::handlers::{log_failure, not_found_page};
use crate::response::{
    DataResponse, EditPage, FormPage, PageOutcome, SearchPage, SubmissionStatus,
};
use crate::state::AppState;

/// GET /artists
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ListingSummary>>>> {
    let now = Utc::now();
    let artists = ArtistRepo::list_summaries(&state.pool, now).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Json<DataResponse<SearchPage>>> {
    let now = Utc::now();
    let matches = ArtistRepo::search_by_name(&state.pool, &form.search_term, now).await?;
    Ok(Json(DataResponse {
        data: SearchPage {
            search_term: form.search_term,
            results: SearchResults::new(matches),
        },
    }))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<PageOutcome<ArtistDetail>> {
    let now = Utc::now();
    let Some(artist) = ArtistRepo::find_by_id(&state.pool, id).await? else {
        return Ok(PageOutcome::Home(not_found_page("Artist", id)));
    };
    let shows = ShowRepo::list_for_artist(&state.pool, id).await?;
    Ok(PageOutcome::Page(ArtistDetail::new(artist, shows, now)))
}

/// GET /artists/create
pub async fn create_form() -> Json<DataResponse<FormPage>> {
    Json(DataResponse {
        data: FormPage {
            choices: FormChoices::default(),
        },
    })
}

/// POST /artists/create
///
/// Takes a JSON body and answers `{"status": "success" | "failed"}`.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateArtistRequest>, JsonRejection>,
) -> SubmissionStatus {
    match insert(&state, body).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
            SubmissionStatus::Success
        }
        Err(err) => {
            log_failure("create artist", &err);
            SubmissionStatus::Failed
        }
    }
}

async fn insert(
    state: &AppState,
    body: Result<Json<CreateArtistRequest>, JsonRejection>,
) -> AppResult<Artist> {
    let Json(request) = body.map_err(|r| AppError::BadRequest(r.body_text()))?;
    let input = request.into_input()?;
    Ok(ArtistRepo::create(&state.pool, &input).await?)
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<PageOutcome<EditPage<ArtistForm>>> {
    let Some(artist) = ArtistRepo::find_by_id(&state.pool, id).await? else {
        return Ok(PageOutcome::Home(not_found_page("Artist", id)));
    };
    Ok(PageOutcome::Page(EditPage {
        values: ArtistForm::from(artist),
        choices: FormChoices::default(),
    }))
}

/// POST /artists/{id}/edit
///
/// Always redirects to the detail page; a failed edit leaves the artist as
/// it was.
pub async fn edit(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    form: Result<MultiForm<ArtistForm>, FormRejection>,
) -> Redirect {
    match overwrite(&state, id, form).await {
        Ok(artist) => tracing::info!(artist_id = artist.id, "Artist updated"),
        Err(err) => log_failure("edit artist", &err),
    }
    Redirect::to(&format!("/artists/{id}"))
}

async fn overwrite(
    state: &AppState,
    id: DbId,
    form: Result<MultiForm<ArtistForm>, FormRejection>,
) -> AppResult<Artist> {
    let MultiForm(form) = form.map_err(|r| AppError::BadRequest(r.to_string()))?;
    let input = form.into_input()?;
    ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))
}

/// DELETE /artists/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> StatusCode {
    match ArtistRepo::delete(&state.pool, id).await {
        Ok(true) => tracing::info!(artist_id = id, "Artist deleted"),
        Ok(false) => tracing::debug!(artist_id = id, "Artist to delete was already gone"),
        Err(err) => log_failure("delete artist", &AppError::Database(err)),
    }
    StatusCode::NO_CONTENT
}
