use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_contact, get_contacts};

pub fn init_contacts_router() -> Router<AppState> {
    Router::new().route("/", get(get_contacts).post(create_contact))
}
