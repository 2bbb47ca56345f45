//! # fb-api
//!
//! The web routing and orchestration layer for Flatboard.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use axum::routing::get;
use axum::Router;

pub use error::ApiError;
pub use handlers::AppState;

/// Builds the board routes with tracing and CORS applied.
///
/// The binary can `nest` the returned router under a prefix (e.g. `/api/v1`).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/board",
            get(handlers::list_boards).post(handlers::create_board),
        )
        .route(
            "/board/{id}",
            get(handlers::get_board)
                .patch(handlers::update_board)
                .delete(handlers::delete_board),
        )
        .layer(middleware::cors_policy())
        .layer(middleware::standard_middleware())
        .with_state(state)
}
