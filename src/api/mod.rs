//! HTTP surface over the instance manager

mod error;
mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use handlers::SharedManager;

/// Build the router for all instance routes
pub fn router(manager: SharedManager) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/instances",
            get(handlers::list_instances).post(handlers::create_instance),
        )
        .route(
            "/instances/{id}",
            get(handlers::get_instance)
                .put(handlers::rename_instance)
                .delete(handlers::delete_instance),
        )
        .route("/instances/{id}/start", post(handlers::start_instance))
        .route("/instances/{id}/stop", post(handlers::stop_instance))
        .route("/instances/{id}/open-folder", post(handlers::open_folder))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(manager)
}
