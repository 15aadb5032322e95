//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    Error, app_state::LedgerState, endpoints, ledger::TransactionId, store::BlobStore,
};

/// A route handler for deleting a transaction, redirects to the tracker page
/// on success.
///
/// The transaction is addressed by its stable ID and resolved to its current
/// position just before removal, so a row rendered before earlier deletions
/// still deletes the right entry.
pub async fn delete_transaction_endpoint<S>(
    State(state): State<LedgerState<S>>,
    Path(transaction_id): Path<TransactionId>,
) -> Response
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

    let Some(index) = ledger.position_of(transaction_id) else {
        return Error::NotFound.into_alert_response();
    };

    match ledger.remove(index) {
        Ok(()) => (
            HxRedirect(endpoints::ROOT.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}
