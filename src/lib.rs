//! Pocketbook is a single-page web app for tracking personal income and
//! expenses.
//!
//! Users record income and expense entries, see a running balance plus
//! income/expense totals, edit or delete entries, and reset all data. The
//! ledger is persisted to a local store after every change, so it survives
//! across sessions.
//!
//! This library provides the [Ledger] and its [store](BlobStore), and a web
//! server that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod ledger;
mod not_found;
mod overview;
mod routing;
mod store;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use error::Error;
pub use ledger::{
    Ledger, TRANSACTIONS_KEY, Totals, Transaction, TransactionId, TransactionKind,
};
pub use routing::build_router;
pub use store::{BlobStore, MemoryBlobStore, SqliteBlobStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
