use storage::{
    Database,
    dto::leaderboard::{Leaderboards, PodiumsResponse},
    services::leaderboard,
};

/// Recompute every leaderboard from a fresh snapshot
pub fn get_leaderboards(db: &Database) -> Leaderboards {
    leaderboard::compute(&db.snapshot())
}

/// Recompute and keep only the per-event top-three extracts
pub fn get_podiums(db: &Database) -> PodiumsResponse {
    let boards = leaderboard::compute(&db.snapshot());

    PodiumsResponse {
        event_podiums: boards.event_podiums,
        group_event_podiums: boards.group_event_podiums,
    }
}
