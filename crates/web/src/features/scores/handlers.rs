use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::score::{
        LockEventRequest, LockGroupEventRequest, SubmitScoreRequest, SubmitTeamScoreRequest,
    },
    models::{GroupEventLock, JudgeLock, Score},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = SubmitScoreRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Score sheet recorded", body = Score),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Participant or event not found"),
        (status = 409, description = "Scores are locked or participant not entered")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(db): State<Database>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let score = services::submit(&db, &req)?;

    Ok((StatusCode::CREATED, Json(score)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores/event/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Scores for the event", body = Vec<Score>)
    ),
    tag = "scores"
)]
pub async fn list_event_scores(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Score>>, WebError> {
    Ok(Json(services::list_for_event(&db, event_id)))
}

#[utoipa::path(
    post,
    path = "/api/scores/lock",
    request_body = LockEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scores locked", body = JudgeLock),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Unknown judge")
    ),
    tag = "scores"
)]
pub async fn lock_event(
    State(db): State<Database>,
    Json(req): Json<LockEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let lock = services::lock_event(&db, &req)?;

    Ok(Json(lock).into_response())
}

#[utoipa::path(
    post,
    path = "/api/group-scores",
    request_body = SubmitTeamScoreRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team score recorded"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team or group event not found"),
        (status = 409, description = "Score is locked or the judge/scoring combination is invalid")
    ),
    tag = "scores"
)]
pub async fn submit_team_score(
    State(db): State<Database>,
    Json(req): Json<SubmitTeamScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::submit_team_score(&db, &req)?;

    Ok(Json(serde_json::json!({
        "message": "Team score recorded"
    }))
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/group-scores/lock",
    request_body = LockGroupEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Group event locked", body = GroupEventLock),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group event not found"),
        (status = 409, description = "Unknown judge")
    ),
    tag = "scores"
)]
pub async fn lock_group_event(
    State(db): State<Database>,
    Json(req): Json<LockGroupEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let lock = services::lock_group_event(&db, &req)?;

    Ok(Json(lock).into_response())
}
