use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fyyur_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fyyur_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Coarse classification of a failed operation, used to pick user
/// messaging and log levels at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Validation,
    /// Rejected by a storage constraint (foreign key, unique, not-null, check).
    Conflict,
    /// The store could not be reached in time.
    Unavailable,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => FailureKind::NotFound,
                CoreError::Validation(_) => FailureKind::Validation,
                CoreError::Conflict(_) => FailureKind::Conflict,
                CoreError::Unavailable(_) => FailureKind::Unavailable,
                CoreError::Internal(_) => FailureKind::Internal,
            },
            AppError::Database(err) => classify_sqlx_kind(err),
            AppError::BadRequest(_) => FailureKind::Validation,
            AppError::InternalError(_) => FailureKind::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unavailable(msg) => {
                    tracing::error!(error = %msg, "Storage unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "SERVICE_UNAVAILABLE",
                        "The service is temporarily unavailable".to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// PostgreSQL SQLSTATE class 23 covers integrity constraint violations
/// (23502 not-null, 23503 foreign key, 23505 unique, 23514 check).
fn is_constraint_violation(db_err: &dyn sqlx::error::DatabaseError) -> bool {
    db_err
        .code()
        .is_some_and(|code| code.starts_with("23"))
}

fn classify_sqlx_kind(err: &sqlx::Error) -> FailureKind {
    match err {
        sqlx::Error::RowNotFound => FailureKind::NotFound,
        sqlx::Error::Database(db_err) if is_constraint_violation(&**db_err) => {
            FailureKind::Conflict
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => FailureKind::Unavailable,
        _ => FailureKind::Internal,
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Integrity constraint violations map to 409 with the constraint name.
/// - Connection-level failures map to 503.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match (classify_sqlx_kind(err), err) {
        (FailureKind::NotFound, _) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        (FailureKind::Conflict, sqlx::Error::Database(db_err)) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Write violates constraint: {constraint}"),
            )
        }
        (FailureKind::Unavailable, other) => {
            tracing::error!(error = %other, "Database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "The service is temporarily unavailable".to_string(),
            )
        }
        (_, other) => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
