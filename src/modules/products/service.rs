use anyhow::Context;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::ensure_owner_or_admin;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{
    CreateProductDto, EditProductDto, PaginatedProductsResponse, Product, ProductFilterParams,
    ProductSort, ProductStatus,
};

fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilterParams) {
    if let Some(name) = &filter.name {
        query.push(" AND name ILIKE ").push_bind(format!("%{}%", name));
    }
    if let Some(status) = filter.status {
        query.push(" AND status = ").push_bind(status);
    }
    if let Some(owner_id) = filter.owner_id {
        query.push(" AND owner_id = ").push_bind(owner_id);
    }
}

pub struct ProductService;

impl ProductService {
    #[instrument(skip(db, user, dto), fields(owner_id = %user.id))]
    pub async fn create(
        db: &PgPool,
        user: &User,
        dto: CreateProductDto,
    ) -> Result<Product, AppError> {
        let status = if dto.stock > 0 {
            ProductStatus::InStock
        } else {
            ProductStatus::StockOut
        };

        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (owner_id, name, description, price, stock, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .bind(dto.stock)
        .bind(status)
        .fetch_one(db)
        .await
        .context("Failed to create product")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        filter: &ProductFilterParams,
        pagination: &PaginationParams,
    ) -> Result<PaginatedProductsResponse, AppError> {
        let mut count_query =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products WHERE TRUE");
        push_filters(&mut count_query, filter);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(db)
            .await
            .context("Failed to count products")
            .map_err(AppError::database)?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM products WHERE TRUE");
        push_filters(&mut query, filter);
        query.push(match filter.sort {
            Some(ProductSort::PriceAsc) => " ORDER BY price ASC",
            Some(ProductSort::PriceDesc) => " ORDER BY price DESC",
            Some(ProductSort::Newest) | None => " ORDER BY created_at DESC",
        });
        query.push(" LIMIT ");
        query.push_bind(pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(pagination.offset());

        let products = query
            .build_query_as::<Product>()
            .fetch_all(db)
            .await
            .context("Failed to fetch products")
            .map_err(AppError::database)?;

        Ok(PaginatedProductsResponse {
            data: products,
            meta: PaginationMeta::new(total, pagination.limit(), pagination.offset()),
        })
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch product")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Sets the stock quantity; availability follows the new quantity.
    #[instrument(skip(db, user))]
    pub async fn update_stock(
        db: &PgPool,
        user: &User,
        id: Uuid,
        stock: i32,
    ) -> Result<Product, AppError> {
        let product = Self::get(db, id).await?;
        ensure_owner_or_admin(user, product.owner_id)?;

        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET stock = $2,
                status = CASE WHEN $2 > 0
                    THEN 'in_stock'::product_status
                    ELSE 'stock_out'::product_status
                END,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(stock)
        .fetch_optional(db)
        .await
        .context("Failed to update stock")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Marks a product unavailable without touching the recorded quantity.
    #[instrument(skip(db, user))]
    pub async fn stock_out(db: &PgPool, user: &User, id: Uuid) -> Result<Product, AppError> {
        let product = Self::get(db, id).await?;
        ensure_owner_or_admin(user, product.owner_id)?;

        sqlx::query_as::<_, Product>(
            "UPDATE products SET status = 'stock_out', updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to mark product stock-out")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Product not found"))
    }

    #[instrument(skip(db, user, dto))]
    pub async fn edit(
        db: &PgPool,
        user: &User,
        id: Uuid,
        dto: EditProductDto,
    ) -> Result<Product, AppError> {
        let product = Self::get(db, id).await?;
        ensure_owner_or_admin(user, product.owner_id)?;

        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.price)
        .fetch_optional(db)
        .await
        .context("Failed to edit product")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found("Product not found"))
    }

    #[instrument(skip(db, user))]
    pub async fn delete(db: &PgPool, user: &User, id: Uuid) -> Result<(), AppError> {
        let product = Self::get(db, id).await?;
        ensure_owner_or_admin(user, product.owner_id)?;

        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete product")
            .map_err(AppError::database)?;

        Ok(())
    }
}
