use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_leaderboard, get_podiums};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/leaderboard/podiums", get(get_podiums))
}
