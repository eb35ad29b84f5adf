use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_funding, get_funding_total, get_fundings};

pub fn init_fundings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_fundings).post(create_funding))
        .route("/total", get(get_funding_total))
}
