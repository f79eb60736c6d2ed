//! HTTP layer over the agenda event store.
//!
//! The router is built separately from `main` so integration tests can
//! drive it in-process without binding a socket.

pub mod routes;
pub mod seed;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Build the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new().merge(routes::events::router()).with_state(state)
}
