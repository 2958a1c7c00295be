use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_event, create_group_event, create_group_team, declare_event_results,
    declare_group_event_results, list_events, list_group_events, list_group_teams,
    revert_event_results, revert_group_event_results,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/events", get(list_events))
        .route("/group-events", get(list_group_events))
        .route("/group-teams", get(list_group_teams))
}

pub fn admin_routes() -> Router<Database> {
    Router::new()
        .route("/events", post(create_event))
        .route("/group-events", post(create_group_event))
        .route("/group-teams", post(create_group_team))
        .route("/events/:event_id/declare", post(declare_event_results))
        .route("/events/:event_id/revert", post(revert_event_results))
        .route(
            "/group-events/:group_event_id/declare",
            post(declare_group_event_results),
        )
        .route(
            "/group-events/:group_event_id/revert",
            post(revert_group_event_results),
        )
}
