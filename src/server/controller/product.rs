use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::product::{GetProductsParam, DEFAULT_PRODUCTS_PER_PAGE},
    service::product::ProductService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    DEFAULT_PRODUCTS_PER_PAGE
}

/// Get a page of the product catalogue.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Zero-based page number and page size (clamped to 1..=100)
///
/// # Returns
/// - `200 OK` - Products for the page with paging totals
/// - `500 Internal Server Error` - Database error
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .get_paginated(GetProductsParam::new(params.page, Some(params.entries)))
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto())))
}

/// Get a single product.
///
/// # Returns
/// - `200 OK` - The product
/// - `404 Not Found` - No product with that id
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db).get_by_id(product_id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}
