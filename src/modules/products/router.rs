use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{
    create_product, delete_product, edit_product, get_product, get_products, stock_out,
    update_stock,
};

pub fn init_products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_products).post(create_product))
        .route("/{id}", get(get_product).delete(delete_product))
        .route("/{id}/update-stock", patch(update_stock))
        .route("/{id}/stock-out", patch(stock_out))
        .route("/{id}/edit", patch(edit_product))
}
