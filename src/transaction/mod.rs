//! Recording, editing, deleting and resetting transactions.
//!
//! This module contains the mutation endpoints and the edit page. Every
//! successful mutation redirects back to the tracker page so that the
//! history and totals are re-derived from fresh ledger state.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod reset_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::update_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use reset_endpoint::reset_endpoint;
