//! Response-level errors for the mutation routes.
//!
//! Every variant carries text that is already localized for the request, so
//! `IntoResponse` only has to pick the status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use safe_core::errors::CoreError;
use safe_core::i18n::Translations;
use safe_db::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required submission field was blank.
    #[error("{message}")]
    Validation { message: &'static str },

    /// The admin token was absent or wrong.
    #[error("{message}")]
    Unauthorized { message: &'static str },

    /// The record id to delete was missing or malformed.
    #[error("{message}")]
    InvalidRecordId { message: &'static str },

    /// The store rejected a write.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: DatabaseError,
    },
}

impl AppError {
    /// Localize a validation or authorization failure.
    #[must_use]
    pub const fn from_core(error: &CoreError, t: &Translations) -> Self {
        match error {
            CoreError::MissingField { .. } => Self::Validation {
                message: t.err_req,
            },
            CoreError::Unauthorized => Self::Unauthorized {
                message: t.err_auth,
            },
            CoreError::InvalidRecordId(_) => Self::InvalidRecordId { message: t.err_id },
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidRecordId { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::FORBIDDEN,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
