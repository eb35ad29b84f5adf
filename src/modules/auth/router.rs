use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{add_user, me, request_merchant};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/add-user", post(add_user))
        .route("/me", get(me))
        .route("/request-merchant", post(request_merchant))
}
