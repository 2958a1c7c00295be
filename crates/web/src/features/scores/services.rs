use storage::{
    Database,
    dto::score::{
        LockEventRequest, LockGroupEventRequest, SubmitScoreRequest, SubmitTeamScoreRequest,
    },
    error::Result,
    models::{GroupEventLock, JudgeLock, Score},
    repository::score::ScoreRepository,
};
use uuid::Uuid;

/// Submit or replace a judge's score sheet
pub fn submit(db: &Database, request: &SubmitScoreRequest) -> Result<Score> {
    ScoreRepository::new(db).submit(request)
}

/// List all scores for one event
pub fn list_for_event(db: &Database, event_id: Uuid) -> Vec<Score> {
    ScoreRepository::new(db).list_for_event(event_id)
}

/// Lock a judge's scores for an event+category pair
pub fn lock_event(db: &Database, request: &LockEventRequest) -> Result<JudgeLock> {
    ScoreRepository::new(db).lock_event(request)
}

/// Record a score for a team
pub fn submit_team_score(db: &Database, request: &SubmitTeamScoreRequest) -> Result<()> {
    ScoreRepository::new(db).submit_team_score(request)
}

/// Lock a group event for a judge, or as the quiz aggregate
pub fn lock_group_event(db: &Database, request: &LockGroupEventRequest) -> Result<GroupEventLock> {
    ScoreRepository::new(db).lock_group_event(request)
}
