use axum::{
    routing::{get, put},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

/// Shared application state. The pool is the only handle to persisted data.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub default_per_page: i64,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/api/productos",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/api/productos/:id",
            get(handlers::products::get_product).delete(handlers::products::delete_product),
        )
        .route("/api/productos/:id/stock", put(handlers::products::update_stock))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
