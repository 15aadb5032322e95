//! Defines the endpoint for recording a new transaction.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    Error, app_state::LedgerState, endpoints, ledger::TransactionKind, store::BlobStore,
};

/// The form data for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct NewTransactionForm {
    /// What the money was earned or spent on.
    pub name: String,
    /// The value of the transaction in dollars. Parsed here rather than by
    /// the extractor so non-numeric input gets the validation alert instead
    /// of a bare 422.
    pub amount: String,
    /// Whether the transaction records income or an expense.
    pub kind: TransactionKind,
}

/// A route handler for recording a new transaction, redirects to the tracker
/// page on success.
pub async fn create_transaction_endpoint<S>(
    State(state): State<LedgerState<S>>,
    Form(form): Form<NewTransactionForm>,
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

    match ledger.add(&form.name, raw_amount, form.kind) {
        Ok(transaction) => {
            tracing::debug!("recorded transaction {}", transaction.id);
            (
                HxRedirect(endpoints::ROOT.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error @ (Error::EmptyName | Error::InvalidAmount)) => error.into_alert_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while recording a transaction: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod create_transaction_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Form, extract::State, http::StatusCode};

    use crate::{
        app_state::LedgerState,
        endpoints,
        ledger::{Ledger, TransactionKind},
        store::MemoryBlobStore,
        test_utils::assert_hx_redirect,
    };

    use super::{NewTransactionForm, create_transaction_endpoint};

    fn get_ledger_state() -> LedgerState<MemoryBlobStore> {
        LedgerState {
            ledger: Arc::new(Mutex::new(Ledger::load(MemoryBlobStore::new()))),
        }
    }

    #[tokio::test]
    async fn records_income_and_redirects_to_the_tracker() {
        let state = get_ledger_state();

        let response = create_transaction_endpoint(
            State(state.clone()),
            Form(NewTransactionForm {
                name: "Salary".to_owned(),
                amount: "1000".to_owned(),
                kind: TransactionKind::Income,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::ROOT);

        let ledger = state.ledger.lock().unwrap();
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.transactions()[0].name, "Salary");
        assert_eq!(ledger.transactions()[0].amount, 1000.0);
    }

    #[tokio::test]
    async fn records_expense_with_a_negative_amount() {
        let state = get_ledger_state();

        create_transaction_endpoint(
            State(state.clone()),
            Form(NewTransactionForm {
                name: "Rent".to_owned(),
                amount: "400".to_owned(),
                kind: TransactionKind::Expense,
            }),
        )
        .await;

        let ledger = state.ledger.lock().unwrap();
        assert_eq!(ledger.transactions()[0].amount, -400.0);
    }

    #[tokio::test]
    async fn empty_name_responds_with_an_alert_and_does_not_mutate() {
        let state = get_ledger_state();

        let response = create_transaction_endpoint(
            State(state.clone()),
            Form(NewTransactionForm {
                name: "   ".to_owned(),
                amount: "1000".to_owned(),
                kind: TransactionKind::Income,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.ledger.lock().unwrap().transactions().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_amount_responds_with_an_alert_and_does_not_mutate() {
        let state = get_ledger_state();

        for raw_amount in ["", "abc", "12.3.4"] {
            let response = create_transaction_endpoint(
                State(state.clone()),
                Form(NewTransactionForm {
                    name: "Salary".to_owned(),
                    amount: raw_amount.to_owned(),
                    kind: TransactionKind::Income,
                }),
            )
            .await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        assert!(state.ledger.lock().unwrap().transactions().is_empty());
    }

    #[test]
    fn form_decodes_from_urlencoded_data() {
        let form: NewTransactionForm =
            serde_html_form::from_str("name=Salary&amount=1000&kind=income").unwrap();

        assert_eq!(form.name, "Salary");
        assert_eq!(form.amount, "1000");
        assert_eq!(form.kind, TransactionKind::Income);

        let form: NewTransactionForm =
            serde_html_form::from_str("name=Rent&amount=400.50&kind=expense").unwrap();

        assert_eq!(form.kind, TransactionKind::Expense);
    }

    #[tokio::test]
    async fn non_finite_amount_responds_with_an_alert() {
        let state = get_ledger_state();

        // "NaN" parses as a float but is not a valid amount.
        let response = create_transaction_endpoint(
            State(state.clone()),
            Form(NewTransactionForm {
                name: "Salary".to_owned(),
                amount: "NaN".to_owned(),
                kind: TransactionKind::Income,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.ledger.lock().unwrap().transactions().is_empty());
    }
}
