use axum::{routing::get, Router};

pub mod orders;
pub mod products;
pub mod stock;
pub mod suppliers;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/products", products::router())
        .nest("/suppliers", suppliers::router())
        .nest("/orders", orders::router())
        .nest("/stock", stock::router())
        .nest("/movements", stock::movements_router())
}
