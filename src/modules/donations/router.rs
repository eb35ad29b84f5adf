use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{
    create_donation_request, delete_donation_request, get_donation_request,
    get_donation_requests, respond_to_donation_request, update_donation_status,
};

pub fn init_donations_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_donation_requests).post(create_donation_request),
        )
        .route(
            "/{id}",
            get(get_donation_request).delete(delete_donation_request),
        )
        .route("/{id}/respond", patch(respond_to_donation_request))
        .route("/{id}/status", patch(update_donation_status))
}
