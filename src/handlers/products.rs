use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{debug, info};

use crate::{
    db,
    error::{AppError, AppResult},
    models::{CreateProduct, PageParams, Pagination, Product, UpdateStock},
    AppState,
};

/// A non-integer id can never name a product.
fn product_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::NotFound(rejection.body_text()))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // An unparsable query string (e.g. a repeated key) means default paging.
    let params = params.map(|Query(params)| params).unwrap_or_default();
    let request = params.resolve(state.default_per_page);

    let start = Instant::now();
    let products = db::fetch_products(&state.db, &request).await?;
    let total = db::count_products(&state.db).await?;
    let elapsed = start.elapsed();

    info!(
        page = request.page,
        per_page = request.per_page,
        count = products.len(),
        total,
        elapsed_ms = elapsed.as_millis(),
        "Listed products"
    );

    Ok((
        StatusCode::OK,
        Json(json!({
            "products": products,
            "pagination": Pagination::new(request, total),
        })),
    ))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let new = json_body(payload)?.validate()?;

    let product = db::insert_product(&state.db, &new).await?;

    info!(id = product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Product>> {
    let id = product_id(path)?;
    let product = db::fetch_product_by_id(&state.db, id).await?;

    debug!(id, "Fetched product");

    Ok(Json(product))
}

// ── Update stock ──────────────────────────────────────────────────────────────

/// The id is resolved before the body is inspected, so an unknown product is
/// a 404 regardless of what was sent.
pub async fn update_stock(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStock>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let id = product_id(path)?;
    let existing = db::fetch_product_by_id(&state.db, id).await?;

    let stock = json_body(payload)?.validate()?;
    let product = db::update_stock(&state.db, id, stock).await?;

    info!(id, from = existing.stock, to = product.stock, "Updated stock");

    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let id = product_id(path)?;
    db::delete_product(&state.db, id).await?;

    info!(id, "Deleted product");

    Ok(Json(json!({ "message": "Product deleted" })))
}
