use axum::{
    Router,
    routing::{delete, get, patch},
};

use crate::state::AppState;

use super::controller::{
    approve_merchant, delete_user, get_users, reject_merchant, update_role, update_status,
};

/// Admin-only user management routes. The admin guard is applied where this
/// router is nested, so every route here assumes an authenticated admin.
pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/users/{id}", delete(delete_user))
        .route("/users/{id}/update-role", patch(update_role))
        .route("/users/{id}/update-status", patch(update_status))
        .route("/approve-merchant/{id}", patch(approve_merchant))
        .route("/reject-merchant/{id}", patch(reject_merchant))
}
