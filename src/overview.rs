//! The tracker page, the app's single page.
//!
//! Shows the balance, income and expense totals, the forms for recording new
//! entries, and the transaction history with per-entry edit and delete
//! actions plus the reset button.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    app_state::LedgerState,
    endpoints,
    html::{
        AMOUNT_EXPENSE_STYLE, AMOUNT_INCOME_STYLE, BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE,
        CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    ledger::{Totals, Transaction, TransactionKind},
    store::BlobStore,
};

/// Render the tracker page.
pub async fn get_overview_page<S>(State(state): State<LedgerState<S>>) -> Response
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

    let totals = ledger.totals();
    let rows: Vec<TransactionRow> = ledger
        .transactions()
        .iter()
        .map(TransactionRow::new_from_transaction)
        .collect();

    drop(ledger);

    overview_view(totals, &rows).into_response()
}

/// A transaction with its display fields and action URLs for template
/// rendering.
#[derive(Debug, Clone)]
struct TransactionRow {
    name: String,
    sign: &'static str,
    display_amount: String,
    amount_style: &'static str,
    edit_url: String,
    delete_url: String,
}

impl TransactionRow {
    fn new_from_transaction(transaction: &Transaction) -> Self {
        let is_income = transaction.amount > 0.0;

        Self {
            name: transaction.name.clone(),
            sign: if is_income { "+" } else { "-" },
            display_amount: format_currency(transaction.amount.abs()),
            amount_style: if is_income {
                AMOUNT_INCOME_STYLE
            } else {
                AMOUNT_EXPENSE_STYLE
            },
            edit_url: endpoints::format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id),
            delete_url: endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id),
        }
    }
}

fn overview_view(totals: Totals, rows: &[TransactionRow]) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-2xl"
            {
                h1 class="text-2xl font-bold text-center mb-6" { "Pocketbook" }

                (totals_view(totals))
                (add_forms_view())
                (history_view(rows))
            }
        }
    );

    base("Tracker", &content)
}

fn totals_view(totals: Totals) -> Markup {
    html!(
        section class="w-full mb-8"
        {
            div id="balance" class={(CARD_STYLE) " text-center mb-4"}
            {
                h2 class="text-sm uppercase text-gray-600 dark:text-gray-400" { "Balance" }
                p class="text-3xl font-bold" { (format_currency(totals.balance)) }
            }

            div class="grid grid-cols-2 gap-4"
            {
                div id="income" class={(CARD_STYLE) " text-center"}
                {
                    h2 class="text-sm uppercase text-gray-600 dark:text-gray-400" { "Income" }
                    p class={"text-xl " (AMOUNT_INCOME_STYLE)} { (format_currency(totals.income)) }
                }

                div id="expense" class={(CARD_STYLE) " text-center"}
                {
                    h2 class="text-sm uppercase text-gray-600 dark:text-gray-400" { "Expense" }
                    p class={"text-xl " (AMOUNT_EXPENSE_STYLE)} { (format_currency(totals.expense)) }
                }
            }
        }
    )
}

fn add_forms_view() -> Markup {
    html!(
        section class="w-full grid grid-cols-1 md:grid-cols-2 gap-4 mb-8"
        {
            div class=(CARD_STYLE) { (add_transaction_form_view(TransactionKind::Income)) }
            div class=(CARD_STYLE) { (add_transaction_form_view(TransactionKind::Expense)) }
        }
    )
}

fn add_transaction_form_view(kind: TransactionKind) -> Markup {
    let (title, kind_value, id_prefix) = match kind {
        TransactionKind::Income => ("Add Income", "income", "income"),
        TransactionKind::Expense => ("Add Expense", "expense", "expense"),
    };

    html!(
        form
            hx-post=(endpoints::POST_TRANSACTION)
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            h3 class="text-lg font-semibold" { (title) }

            div
            {
                label for={(id_prefix) "-name"} class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id={(id_prefix) "-name"}
                    type="text"
                    name="name"
                    placeholder="Name"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for={(id_prefix) "-amount"} class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id={(id_prefix) "-amount"}
                    type="number"
                    name="amount"
                    step="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            input type="hidden" name="kind" value=(kind_value);

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (title) }
        }
    )
}

fn history_view(rows: &[TransactionRow]) -> Markup {
    html!(
        section class="w-full"
        {
            div class="flex justify-between flex-wrap items-end mb-2"
            {
                h2 class="text-xl font-bold" { "History" }

                button
                    hx-post=(endpoints::RESET)
                    hx-confirm="Delete all transactions? This cannot be undone."
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Reset"
                }
            }

            @if rows.is_empty() {
                p class="empty-text text-center text-gray-600 dark:text-gray-400 py-8"
                {
                    "No transactions yet"
                }
            } @else {
                div class="dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for row in rows {
                                (history_row_view(row))
                            }
                        }
                    }
                }
            }
        }
    )
}

fn history_row_view(row: &TransactionRow) -> Markup {
    html!(
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (row.name) }

            td class=(TABLE_CELL_STYLE)
            {
                span class=(row.amount_style) { (row.sign) (row.display_amount) }
            }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(row.edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        hx-delete=(row.delete_url)
                        hx-confirm={ "Delete '" (row.name) "'?" }
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod overview_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use scraper::{Html, Selector};

    use crate::{
        app_state::LedgerState,
        endpoints,
        ledger::{Ledger, TransactionKind},
        store::MemoryBlobStore,
        test_utils::{assert_content_type, assert_valid_html, parse_html_document},
    };

    use super::get_overview_page;

    fn get_ledger_state() -> LedgerState<MemoryBlobStore> {
        let ledger = Ledger::load(MemoryBlobStore::new());

        LedgerState {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    async fn render_page(state: LedgerState<MemoryBlobStore>) -> Html {
        let response = get_overview_page(State(state)).await;

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        html
    }

    fn select_text(html: &Html, css_selector: &str) -> String {
        let selector = Selector::parse(css_selector).unwrap();

        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("no element matches {css_selector}"))
            .text()
            .collect::<Vec<_>>()
            .join("")
    }

    #[tokio::test]
    async fn empty_ledger_shows_placeholder_and_zero_totals() {
        let state = get_ledger_state();

        let html = render_page(state).await;

        assert!(select_text(&html, "#balance").contains("$0.00"));
        assert!(select_text(&html, "#income").contains("$0.00"));
        assert!(select_text(&html, "#expense").contains("$0.00"));
        assert!(select_text(&html, "p.empty-text").contains("No transactions yet"));
        assert!(
            html.select(&Selector::parse("table").unwrap()).next().is_none(),
            "want no history table on an empty ledger"
        );
    }

    #[tokio::test]
    async fn totals_and_rows_reflect_the_ledger() {
        let state = get_ledger_state();
        {
            let mut ledger = state.ledger.lock().unwrap();
            ledger.add("Salary", 1000.0, TransactionKind::Income).unwrap();
            ledger.add("Rent", 400.0, TransactionKind::Expense).unwrap();
        }

        let html = render_page(state).await;

        assert!(select_text(&html, "#balance").contains("$600.00"));
        assert!(select_text(&html, "#income").contains("$1,000.00"));
        assert!(select_text(&html, "#expense").contains("$400.00"));

        let row_selector = Selector::parse("tbody tr").unwrap();
        let rows: Vec<_> = html.select(&row_selector).collect();
        assert_eq!(rows.len(), 2, "want 2 history rows, got {}", rows.len());

        let first_row_text = rows[0].text().collect::<Vec<_>>().join("");
        assert!(first_row_text.contains("Salary"));
        assert!(first_row_text.contains("+$1,000.00"));

        let second_row_text = rows[1].text().collect::<Vec<_>>().join("");
        assert!(second_row_text.contains("Rent"));
        assert!(second_row_text.contains("-$400.00"));
    }

    #[tokio::test]
    async fn rows_link_to_the_edit_page_and_delete_endpoint() {
        let state = get_ledger_state();
        let transaction = {
            let mut ledger = state.ledger.lock().unwrap();
            ledger.add("Rent", 400.0, TransactionKind::Expense).unwrap()
        };

        let html = render_page(state).await;

        let edit_selector = Selector::parse("tbody a").unwrap();
        let edit_link = html.select(&edit_selector).next().expect("no edit link");
        assert_eq!(
            edit_link.value().attr("href").unwrap_or_default(),
            endpoints::format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id)
        );

        let delete_selector = Selector::parse("tbody button[hx-delete]").unwrap();
        let delete_button = html
            .select(&delete_selector)
            .next()
            .expect("no delete button");
        assert_eq!(
            delete_button.value().attr("hx-delete").unwrap_or_default(),
            endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id)
        );
        assert!(
            delete_button.value().attr("hx-confirm").is_some(),
            "want the delete button to ask for confirmation"
        );
    }

    #[tokio::test]
    async fn both_add_forms_post_to_the_transactions_endpoint() {
        let state = get_ledger_state();

        let html = render_page(state).await;

        let form_selector = Selector::parse("form").unwrap();
        let forms: Vec<_> = html.select(&form_selector).collect();
        assert_eq!(forms.len(), 2, "want 2 add forms, got {}", forms.len());

        let kind_selector = Selector::parse("input[name=kind]").unwrap();
        for (form, want_kind) in forms.iter().zip(["income", "expense"]) {
            assert_eq!(
                form.value().attr("hx-post").unwrap_or_default(),
                endpoints::POST_TRANSACTION
            );

            let kind = form
                .select(&kind_selector)
                .next()
                .expect("no hidden kind input");
            assert_eq!(kind.value().attr("value").unwrap_or_default(), want_kind);
        }
    }

    #[tokio::test]
    async fn reset_button_posts_to_the_reset_endpoint() {
        let state = get_ledger_state();

        let html = render_page(state).await;

        let reset_selector = Selector::parse("button[hx-post]").unwrap();
        let reset_button = html.select(&reset_selector).next().expect("no reset button");
        assert_eq!(
            reset_button.value().attr("hx-post").unwrap_or_default(),
            endpoints::RESET
        );
        assert!(reset_button.value().attr("hx-confirm").is_some());
    }

    #[tokio::test]
    async fn zero_amount_rows_display_as_expense() {
        let state = get_ledger_state();
        {
            let mut ledger = state.ledger.lock().unwrap();
            ledger.add("Nothing", 0.0, TransactionKind::Income).unwrap();
        }

        let html = render_page(state).await;

        let row_text = select_text(&html, "tbody tr");
        assert!(row_text.contains("-$0.00"));
    }
}
