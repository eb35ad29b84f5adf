use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{create_blog, delete_blog, get_blog, get_blogs, publish_blog};

pub fn init_blogs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_blogs).post(create_blog))
        .route("/{id}", get(get_blog).delete(delete_blog))
        .route("/{id}/publish", patch(publish_blog))
}
