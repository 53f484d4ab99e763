//! Request handlers.
//!
//! Each submodule provides the async handlers for one resource. Reads
//! propagate errors through [`AppError`]; form submissions recover from
//! failures and answer with a notice, logging the cause here.

pub mod artist;
pub mod errors;
pub mod home;
pub mod show;
pub mod venue;

use fyyur_core::types::DbId;

use crate::error::{AppError, FailureKind};
use crate::flash::Flash;
use crate::response::HomePage;

/// Log a recovered mutation failure at a level matching its kind.
pub(crate) fn log_failure(action: &'static str, err: &AppError) {
    let kind = err.kind();
    match kind {
        FailureKind::Unavailable | FailureKind::Internal => {
            tracing::error!(action, ?kind, error = %err, "Mutation failed");
        }
        FailureKind::NotFound | FailureKind::Validation | FailureKind::Conflict => {
            tracing::warn!(action, ?kind, error = %err, "Mutation failed");
        }
    }
}

/// Home page reporting a failed submission.
///
/// Validation failures also carry the reason so the user can correct the
/// input; other causes stay in the logs.
pub(crate) fn failure_page(message: String, err: &AppError) -> HomePage {
    let mut page = HomePage::with_flash(Flash::error(message));
    if err.kind() == FailureKind::Validation {
        page.flash.push(Flash::info(err.to_string()));
    }
    page
}

/// Home page shown in place of a detail or edit page whose record is gone.
pub(crate) fn not_found_page(entity: &'static str, id: DbId) -> HomePage {
    HomePage::with_flash(Flash::error(format!("{entity} with id {id} does not exist")))
}
