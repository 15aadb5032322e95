//! Defines the endpoint for updating a transaction.

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    Error, app_state::LedgerState, endpoints, ledger::TransactionId, store::BlobStore,
};

/// The form data for updating a transaction.
#[derive(Debug, Deserialize)]
pub struct EditTransactionForm {
    /// What the money was earned or spent on.
    pub name: String,
    /// The new magnitude in dollars. Parsed here rather than by the extractor
    /// so non-numeric input gets the validation alert instead of a bare 422.
    pub amount: String,
}

/// A route handler for updating a transaction's name and magnitude, redirects
/// to the tracker page on success.
///
/// The entry keeps its kind: the sign of the stored amount never changes.
pub async fn update_transaction_endpoint<S>(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<LedgerState<S>>,
    Form(form): Form<EditTransactionForm>,
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

    let raw_amount = match form.amount.trim().parse::<f64>() {
        Ok(raw_amount) => raw_amount,
        Err(_) => return Error::InvalidAmount.into_alert_response(),
    };

    let Some(index) = ledger.position_of(transaction_id) else {
        return Error::NotFound.into_alert_response();
    };

    match ledger.update(index, &form.name, raw_amount) {
        Ok(_) => (
            HxRedirect(endpoints::ROOT.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error @ (Error::EmptyName | Error::InvalidAmount)) => error.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating transaction {transaction_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}
