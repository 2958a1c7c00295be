use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{
        CreateEventRequest, CreateGroupEventRequest, CreateGroupTeamRequest, DeclareResultRequest,
    },
    models::{Event, GroupEvent, GroupTeam},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all individual events", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Json<Vec<Event>>, WebError> {
    Ok(Json(services::list_events(&db)))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Event name already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(&db, &req)?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/group-events",
    responses(
        (status = 200, description = "List all group events", body = Vec<GroupEvent>)
    ),
    tag = "events"
)]
pub async fn list_group_events(
    State(db): State<Database>,
) -> Result<Json<Vec<GroupEvent>>, WebError> {
    Ok(Json(services::list_group_events(&db)))
}

#[utoipa::path(
    post,
    path = "/api/group-events",
    request_body = CreateGroupEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Group event created", body = GroupEvent),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Group event name already exists")
    ),
    tag = "events"
)]
pub async fn create_group_event(
    State(db): State<Database>,
    Json(req): Json<CreateGroupEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let group_event = services::create_group_event(&db, &req)?;

    Ok((StatusCode::CREATED, Json(group_event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/group-teams",
    responses(
        (status = 200, description = "List all group teams", body = Vec<GroupTeam>)
    ),
    tag = "events"
)]
pub async fn list_group_teams(
    State(db): State<Database>,
) -> Result<Json<Vec<GroupTeam>>, WebError> {
    Ok(Json(services::list_group_teams(&db)))
}

#[utoipa::path(
    post,
    path = "/api/group-teams",
    request_body = CreateGroupTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team entered", body = GroupTeam),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Unknown group event or section, or duplicate team")
    ),
    tag = "events"
)]
pub async fn create_group_team(
    State(db): State<Database>,
    Json(req): Json<CreateGroupTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_group_team(&db, &req)?;

    Ok((StatusCode::CREATED, Json(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/declare",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = DeclareResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Results declared"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn declare_event_results(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<DeclareResultRequest>,
) -> Result<Response, WebError> {
    services::declare_individual(&db, event_id, req.category)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/revert",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = DeclareResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Declaration reverted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No declaration to revert")
    ),
    tag = "events"
)]
pub async fn revert_event_results(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<DeclareResultRequest>,
) -> Result<Response, WebError> {
    services::revert_individual(&db, event_id, req.category)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/group-events/{group_event_id}/declare",
    params(
        ("group_event_id" = Uuid, Path, description = "Group event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Results declared"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group event not found")
    ),
    tag = "events"
)]
pub async fn declare_group_event_results(
    State(db): State<Database>,
    Path(group_event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::declare_group(&db, group_event_id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/group-events/{group_event_id}/revert",
    params(
        ("group_event_id" = Uuid, Path, description = "Group event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Declaration reverted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No declaration to revert")
    ),
    tag = "events"
)]
pub async fn revert_group_event_results(
    State(db): State<Database>,
    Path(group_event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::revert_group(&db, group_event_id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
