use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::PaginationMeta;

/// Availability of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "product_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    InStock,
    StockOut,
}

/// A merchant's product. `price` is in minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a product.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    #[serde(default)]
    pub stock: i32,
}

/// DTO for restocking a product.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateStockDto {
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,
}

/// DTO for partially editing a product.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EditProductDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: Option<i64>,
}

/// Sort orders for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    Newest,
    PriceAsc,
    PriceDesc,
}

/// Query parameters for listing products.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilterParams {
    /// Substring match on the product name
    pub name: Option<String>,
    pub status: Option<ProductStatus>,
    /// Restrict to one merchant's products
    pub owner_id: Option<Uuid>,
    pub sort: Option<ProductSort>,
}

/// Paginated product listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedProductsResponse {
    pub data: Vec<Product>,
    pub meta: PaginationMeta,
}
