//! Route definitions for the Cinebook API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod bookings;
mod health;
mod movies;
mod recommendations;

#[cfg(test)]
mod auth_tests;
#[cfg(test)]
mod recommendation_tests;

pub use auth::auth_routes;
pub use bookings::booking_routes;
pub use movies::movie_routes;
pub use recommendations::recommendation_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Cinebook API v1" }))
        .nest("/auth", auth::auth_routes())
        .nest("/movies", movies::movie_routes())
        .nest("/bookings", bookings::booking_routes())
        // Recommendation paths span two prefixes, so they merge at this
        // level instead of nesting
        .merge(recommendations::recommendation_routes())
}
