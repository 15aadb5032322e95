//! Defines the endpoint for deleting every transaction at once.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{Error, app_state::LedgerState, endpoints, store::BlobStore};

/// A route handler that empties the ledger, redirects to the tracker page on
/// success.
///
/// The client asks the user for confirmation before sending this request.
pub async fn reset_endpoint<S>(State(state): State<LedgerState<S>>) -> Response
where
    S: BlobStore + Send + 'static,
{
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire the ledger lock: {error}");
            return Error::LockError.into_alert_response();
        }
    };

    match ledger.clear() {
        Ok(()) => (
            HxRedirect(endpoints::ROOT.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not reset the ledger: {error}");
            error.into_alert_response()
        }
    }
}
