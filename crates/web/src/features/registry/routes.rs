use axum::{
    Router,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    create_judge, create_section, get_points_config, list_judges, list_sections,
    update_points_config,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/sections", get(list_sections))
        .route("/judges", get(list_judges))
        .route("/points-config", get(get_points_config))
}

pub fn admin_routes() -> Router<Database> {
    Router::new()
        .route("/sections", post(create_section))
        .route("/judges", post(create_judge))
        .route("/points-config", put(update_points_config))
}
