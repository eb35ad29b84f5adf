use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{search_donors, search_donors_dynamic};

pub fn init_donors_router() -> Router<AppState> {
    Router::new()
        .route("/search-donors", get(search_donors))
        .route("/search-donors-dynamic", get(search_donors_dynamic))
}
