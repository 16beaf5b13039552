//! HTTP API server

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Path of the customer collection; single customers live under `{CUSTOMERS_PATH}/{id}`
pub const CUSTOMERS_PATH: &str = "/customers";

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            CUSTOMERS_PATH,
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            &format!("{}/:id", CUSTOMERS_PATH),
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Same as [`create_router`] with a permissive CORS layer on top
pub fn create_router_with_cors(state: AppState) -> Router {
    create_router(state).layer(CorsLayer::permissive())
}

/// Location of a single customer, as returned in `Location` headers
pub fn customer_location(id: crate::types::CustomerId) -> String {
    format!("{}/{}", CUSTOMERS_PATH, id)
}
