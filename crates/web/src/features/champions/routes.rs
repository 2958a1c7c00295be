use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{declare_champions, get_champions, revert_champions};

pub fn routes() -> Router<Database> {
    Router::new().route("/champions", get(get_champions))
}

pub fn admin_routes() -> Router<Database> {
    Router::new()
        .route("/champions/declare", post(declare_champions))
        .route("/champions/revert", post(revert_champions))
}
