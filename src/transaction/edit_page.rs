//! Defines the route handler for the page for editing a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, app_state::LedgerState, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, base,
    },
    ledger::TransactionId,
    store::BlobStore,
};

/// Render the page for editing a transaction.
///
/// The form is pre-filled with the entry's name and absolute amount. The kind
/// cannot be changed: an income entry stays income and an expense entry stays
/// an expense, whatever amount is entered.
pub async fn get_edit_transaction_page<S>(
    Path(transaction_id): Path<TransactionId>,
    State(state): State<LedgerState<S>>,
) -> Response
where
    S: BlobStore + Send + 'static,
{
    let ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire the ledger lock: {error}");
            return Error::LockError.into_response();
        }
    };

    let update_endpoint = endpoints::format_endpoint(endpoints::PUT_TRANSACTION, transaction_id);

    match ledger.position_of(transaction_id) {
        Some(index) => {
            let transaction = &ledger.transactions()[index];
            let kind_label = if transaction.amount < 0.0 {
                "Expense"
            } else {
                "Income"
            };

            edit_transaction_view(
                &update_endpoint,
                &transaction.name,
                Some(transaction.amount.abs()),
                kind_label,
                "",
            )
            .into_response()
        }
        None => edit_transaction_view(&update_endpoint, "", None, "", "Transaction not found")
            .into_response(),
    }
}

fn edit_transaction_view(
    update_endpoint: &str,
    name: &str,
    magnitude: Option<f64>,
    kind_label: &str,
    error_message: &str,
) -> Markup {
    let form = edit_transaction_form_view(update_endpoint, name, magnitude, error_message);

    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            div class="w-full flex justify-between items-baseline mb-4"
            {
                h1 class="text-xl font-bold" { "Edit Transaction" }

                @if !kind_label.is_empty() {
                    span class="text-sm text-gray-600 dark:text-gray-400" { (kind_label) }
                }
            }

            (form)

            a href=(endpoints::ROOT) class={"mt-4 " (LINK_STYLE)} { "Back to the tracker" }
        }
    };

    base("Edit Transaction", &content)
}

fn edit_transaction_form_view(
    update_endpoint: &str,
    name: &str,
    magnitude: Option<f64>,
    error_message: &str,
) -> Markup {
    html! {
        form
            hx-put=(update_endpoint)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Name"
                    value=(name)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    placeholder="0.00"
                    value=[magnitude]
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
        }
    }
}
