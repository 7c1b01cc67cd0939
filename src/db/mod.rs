use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{AppError, AppResult};
use crate::models::*;

// ── Pool & schema ─────────────────────────────────────────────────────────────

/// Opens a pool against `database_url`, creating the database file if needed.
///
/// An in-memory database lives only as long as its connection, so it is held
/// on a single connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_options.connect_with(options).await
}

/// Creates the `productos` table if absent. Run once before serving traffic.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

// ── Products ──────────────────────────────────────────────────────────────────

pub async fn fetch_products(pool: &SqlitePool, request: &PageRequest) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, stock FROM productos ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(request.per_page)
    .bind(request.offset())
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn count_products(pool: &SqlitePool) -> AppResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM productos")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn fetch_product_by_id(pool: &SqlitePool, id: i64) -> AppResult<Product> {
    sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM productos WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn insert_product(pool: &SqlitePool, product: &NewProduct) -> AppResult<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO productos (name, price, stock)
        VALUES (?, ?, ?)
        RETURNING id, name, price, stock
        "#,
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(product.stock)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Overwrites `stock` only. A row deleted since the caller's lookup yields `NotFound`.
pub async fn update_stock(pool: &SqlitePool, id: i64, stock: i64) -> AppResult<Product> {
    sqlx::query_as::<_, Product>(
        "UPDATE productos SET stock = ? WHERE id = ? RETURNING id, name, price, stock",
    )
    .bind(stock)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| not_found(id))
}

pub async fn delete_product(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM productos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }
    Ok(())
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}
