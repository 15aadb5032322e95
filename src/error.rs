//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only name was used to create or update a
    /// transaction.
    #[error("transaction name cannot be empty")]
    EmptyName,

    /// A NaN or infinite amount was used to create or update a transaction.
    #[error("transaction amount must be a finite number")]
    InvalidAmount,

    /// An index outside the bounds of the transaction sequence was used to
    /// update or remove a transaction.
    ///
    /// Indexes are positions in the live sequence, so removing an entry
    /// shifts every later index down by one.
    #[error("index {index} is out of bounds for a ledger of {len} transactions")]
    IndexOutOfRange {
        /// The index the caller supplied.
        index: usize,
        /// The length of the sequence at the time of the call.
        len: usize,
    },

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the
    /// transaction ID is correct and that the entry has not been removed.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The transaction sequence could not be serialized for the persistent
    /// store.
    #[error("could not serialize the ledger as JSON: {0}")]
    Serialization(String),

    /// An unhandled/unexpected SQL error from the persistent store.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the lock on shared state.
    #[error("could not acquire the lock on shared state")]
    LockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Whether the error describes invalid user input (bad form values or a
    /// handle that no longer points at an entry) rather than a server fault.
    fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyName
                | Error::InvalidAmount
                | Error::IndexOutOfRange { .. }
                | Error::NotFound
        )
    }

    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// Invalid input gets a single generic message with no further detail.
    /// Everything else renders the generic internal error alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = if self.is_invalid_input() {
            (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid transaction".to_owned(),
                    details: "Please enter a valid name and amount.".to_owned(),
                },
            )
        } else {
            tracing::error!("An unexpected error occurred: {}", self);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                },
            )
        };

        (status_code, alert.into_html()).into_response()
    }
}
