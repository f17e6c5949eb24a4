use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_core::validation::FieldViolation;
use inventory_db::DbError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DbError`] for persistence
/// errors, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository error.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A bad request with a stable error code and a human-readable message.
    #[error("Bad request: {message}")]
    BadRequest {
        code: &'static str,
        message: String,
    },

    /// Required-field or pattern violations from payload validation.
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create rejected because the payload already carries an id.
    pub fn id_exists(entity: &'static str) -> Self {
        AppError::BadRequest {
            code: "ID_EXISTS",
            message: format!("A new {entity} cannot already have an ID"),
        }
    }

    /// Update rejected because the payload id is null.
    pub fn id_null() -> Self {
        AppError::BadRequest {
            code: "ID_NULL",
            message: "Invalid id: id must not be null".to_string(),
        }
    }

    /// Update rejected because the path id and payload id differ.
    pub fn id_mismatch() -> Self {
        AppError::BadRequest {
            code: "ID_MISMATCH",
            message: "Invalid ID: path id and payload id differ".to_string(),
        }
    }

    /// Update or patch aimed at an id that does not exist. Surfaced as a
    /// 400-class business error, distinct from a read 404.
    pub fn id_not_found(entity: &'static str, id: DbId) -> Self {
        AppError::BadRequest {
            code: "ID_NOT_FOUND",
            message: format!("No {entity} found with id {id}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, violations) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            // --- Repository errors ---
            AppError::Db(DbError::StaleUpdate { entity, id }) => {
                tracing::error!(entity, id, "Update affected zero rows");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
            AppError::Db(DbError::Sqlx(err)) => {
                let (status, code, message) = classify_sqlx_error(err);
                (status, code, message, None)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, *code, message.clone(), None)
            }
            AppError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
                Some(violations.clone()),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(violations) = violations {
            body["fieldViolations"] = json!(violations);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (PostgreSQL 23503) map to 400.
/// - Unique constraint violations (23505) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => (
                StatusCode::BAD_REQUEST,
                "FK_VIOLATION",
                "Referenced entity does not exist".to_string(),
            ),
            Some("23505") => (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!(
                    "Duplicate value violates unique constraint: {}",
                    db_err.constraint().unwrap_or("unknown")
                ),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
