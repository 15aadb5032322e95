//! Defines the template and route handlers for the 404 page.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The requested page does not exist.
pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            error_view(
                "Not Found",
                "404",
                "Sorry, that page does not exist.",
                "Check the address, or head back to the tracker.",
            ),
        )
            .into_response()
    }
}

/// The fallback route handler for requests that match no route.
pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}
