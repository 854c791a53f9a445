//! Single-route service answering `GET /` with the server's local time and
//! the caller's address as JSON.

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod server;
pub mod serverless;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use clock::{Clock, SystemClock};

// shared with the handler; nothing in here changes after startup
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>
}

impl AppState {

    pub fn new(clock: impl Clock + 'static) -> Self {

        AppState { clock: Arc::new(clock) }

    }

}

impl Default for AppState {

    fn default() -> Self {

        AppState::new(SystemClock)

    }

}

pub fn app(state: AppState) -> Router {

    Router::new()
        .route("/", get(handlers::get_time_and_ip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)

}
