use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::middleware::role::{RequireMerchant, ensure_active};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::validator::ValidatedJson;

use super::model::{
    CreateProductDto, EditProductDto, PaginatedProductsResponse, Product, ProductFilterParams,
    UpdateStockDto,
};
use super::service::ProductService;

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - merchant role and active account required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    RequireMerchant(user): RequireMerchant,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    ensure_active(&user)?;
    let product = ProductService::create(&state.db, &user, dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List products
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductFilterParams, PaginationParams),
    responses(
        (status = 200, description = "Paginated list of products", body = PaginatedProductsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilterParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedProductsResponse>, AppError> {
    let products = ProductService::list(&state.db, &filter, &pagination).await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::get(&state.db, id).await?;
    Ok(Json(product))
}

/// Set a product's stock quantity
#[utoipa::path(
    patch,
    path = "/api/products/{id}/update-stock",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateStockDto,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the owner or an admin", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_stock(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateStockDto>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::update_stock(&state.db, &user, id, dto.stock).await?;
    Ok(Json(product))
}

/// Mark a product stock-out
#[utoipa::path(
    patch,
    path = "/api/products/{id}/stock-out",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the owner or an admin", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn stock_out(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::stock_out(&state.db, &user, id).await?;
    Ok(Json(product))
}

/// Edit a product
#[utoipa::path(
    patch,
    path = "/api/products/{id}/edit",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = EditProductDto,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the owner or an admin", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn edit_product(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<EditProductDto>,
) -> Result<Json<Product>, AppError> {
    let product = ProductService::edit(&state.db, &user, id, dto).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - not the owner or an admin", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ProductService::delete(&state.db, &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
