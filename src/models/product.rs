use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A stocked item. `id` is assigned by storage on insert and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Raw create body. Every field is optional here so that a missing field is
/// reported as a validation error instead of a deserialization rejection.
/// The Spanish keys of the first version of the API are still accepted.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProduct {
    #[serde(alias = "nombre")]
    pub name: Option<String>,
    #[serde(alias = "precio")]
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl CreateProduct {
    pub fn validate(self) -> AppResult<NewProduct> {
        match (self.name, self.price, self.stock) {
            (Some(name), Some(price), Some(stock)) => Ok(NewProduct { name, price, stock }),
            _ => Err(AppError::Validation("Missing required fields".to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStock {
    pub stock: Option<i64>,
}

impl UpdateStock {
    pub fn validate(self) -> AppResult<i64> {
        self.stock
            .ok_or_else(|| AppError::Validation("Stock field required".to_string()))
    }
}
