//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{
    app_state::AppState,
    endpoints,
    not_found::get_404_not_found,
    overview::get_overview_page,
    store::BlobStore,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_edit_transaction_page,
        reset_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: BlobStore + Send + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_overview_page::<S>))
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page::<S>),
        )
        .route(
            endpoints::POST_TRANSACTION,
            post(create_transaction_endpoint::<S>),
        )
        .route(
            endpoints::PUT_TRANSACTION,
            put(update_transaction_endpoint::<S>),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint::<S>),
        )
        .route(endpoints::RESET, post(reset_endpoint::<S>))
        .fallback(get_404_not_found)
        .with_state(state)
}
