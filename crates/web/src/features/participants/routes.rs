use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_participant, list_participants, register_participant};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/participants", get(list_participants))
        .route("/participants/:chest_number", get(get_participant))
}

pub fn admin_routes() -> Router<Database> {
    Router::new().route("/participants", post(register_participant))
}
