pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::portfolio::handlers as portfolio_handlers;
use crate::scan::handlers as scan_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/create-portfolio",
            post(portfolio_handlers::handle_create_portfolio),
        )
        .route(
            "/api/publish-portfolio",
            post(portfolio_handlers::handle_publish_portfolio),
        )
        .route(
            "/api/delete-portfolio",
            post(portfolio_handlers::handle_delete_portfolio),
        )
        .route(
            "/api/portfolio/:slug",
            get(portfolio_handlers::handle_get_portfolio),
        )
        .route("/api/scan", post(scan_handlers::handle_scan))
        .with_state(state)
}
