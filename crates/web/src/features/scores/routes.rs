use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    list_event_scores, lock_event, lock_group_event, submit_score, submit_team_score,
};

pub fn routes() -> Router<Database> {
    Router::new().route("/scores/event/:event_id", get(list_event_scores))
}

pub fn admin_routes() -> Router<Database> {
    Router::new()
        .route("/scores", post(submit_score))
        .route("/scores/lock", post(lock_event))
        .route("/group-scores", post(submit_team_score))
        .route("/group-scores/lock", post(lock_group_event))
}
