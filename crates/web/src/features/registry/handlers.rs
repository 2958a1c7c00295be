use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::registry::{CreateJudgeRequest, CreateSectionRequest, UpdatePointsConfigRequest},
    models::{Judge, PointsConfig, Section},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/registry/sections",
    responses(
        (status = 200, description = "List all sections", body = Vec<Section>)
    ),
    tag = "registry"
)]
pub async fn list_sections(State(db): State<Database>) -> Result<Json<Vec<Section>>, WebError> {
    Ok(Json(services::list_sections(&db)))
}

#[utoipa::path(
    post,
    path = "/api/registry/sections",
    request_body = CreateSectionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Section registered", body = Section),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Section name already exists")
    ),
    tag = "registry"
)]
pub async fn create_section(
    State(db): State<Database>,
    Json(req): Json<CreateSectionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let section = services::create_section(&db, &req)?;

    Ok((StatusCode::CREATED, Json(section)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/registry/judges",
    responses(
        (status = 200, description = "List all judges", body = Vec<Judge>)
    ),
    tag = "registry"
)]
pub async fn list_judges(State(db): State<Database>) -> Result<Json<Vec<Judge>>, WebError> {
    Ok(Json(services::list_judges(&db)))
}

#[utoipa::path(
    post,
    path = "/api/registry/judges",
    request_body = CreateJudgeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Judge registered", body = Judge),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Username already exists")
    ),
    tag = "registry"
)]
pub async fn create_judge(
    State(db): State<Database>,
    Json(req): Json<CreateJudgeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let judge = services::create_judge(&db, &req)?;

    Ok((StatusCode::CREATED, Json(judge)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/registry/points-config",
    responses(
        (status = 200, description = "Current points configuration", body = PointsConfig)
    ),
    tag = "registry"
)]
pub async fn get_points_config(
    State(db): State<Database>,
) -> Result<Json<PointsConfig>, WebError> {
    Ok(Json(services::points_config(&db)))
}

#[utoipa::path(
    put,
    path = "/api/registry/points-config",
    request_body = UpdatePointsConfigRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Points configuration replaced", body = PointsConfig),
        (status = 401, description = "Unauthorized")
    ),
    tag = "registry"
)]
pub async fn update_points_config(
    State(db): State<Database>,
    Json(req): Json<UpdatePointsConfigRequest>,
) -> Result<Json<PointsConfig>, WebError> {
    let config = services::set_points_config(&db, req.into());

    Ok(Json(config))
}
