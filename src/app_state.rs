//! Implements the structs that hold the state of the server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;

use crate::{ledger::Ledger, store::BlobStore};

/// The state of the server.
///
/// The ledger is behind one mutex, so every operation (including its
/// persistence write) runs to completion before the next one starts.
#[derive(Debug)]
pub struct AppState<S>
where
    S: BlobStore,
{
    /// The ledger owning the transaction sequence and its store.
    pub ledger: Arc<Mutex<Ledger<S>>>,
}

impl<S> AppState<S>
where
    S: BlobStore,
{
    /// Create a new [AppState] owning `ledger`.
    pub fn new(ledger: Ledger<S>) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }
}

impl<S> Clone for AppState<S>
where
    S: BlobStore,
{
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
        }
    }
}

/// The state needed by the route handlers that read or mutate the ledger.
#[derive(Debug)]
pub struct LedgerState<S>
where
    S: BlobStore,
{
    /// A handle to the single application ledger.
    pub ledger: Arc<Mutex<Ledger<S>>>,
}

impl<S> Clone for LedgerState<S>
where
    S: BlobStore,
{
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
        }
    }
}

impl<S> FromRef<AppState<S>> for LedgerState<S>
where
    S: BlobStore,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}
