use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::champions::{ChampionsResponse, DeclareChampionsRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/champions",
    responses(
        (status = 200, description = "Current champions declaration state", body = ChampionsResponse)
    ),
    tag = "champions"
)]
pub async fn get_champions(
    State(db): State<Database>,
) -> Result<Json<ChampionsResponse>, WebError> {
    Ok(Json(ChampionsResponse::from(services::current(&db))))
}

#[utoipa::path(
    post,
    path = "/api/champions/declare",
    request_body = DeclareChampionsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Champions declared", body = ChampionsResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Fewer than 3 sections with a non-zero standing")
    ),
    tag = "champions"
)]
pub async fn declare_champions(
    State(db): State<Database>,
    Json(req): Json<DeclareChampionsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let champions = services::declare(&db, &req.declared_by)?;
    tracing::info!(declared_by = %req.declared_by, "Final champions declared");

    Ok(Json(ChampionsResponse::from(Some(champions))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/champions/revert",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Declaration reverted"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "No champions are currently declared")
    ),
    tag = "champions"
)]
pub async fn revert_champions(State(db): State<Database>) -> Result<Response, WebError> {
    services::revert(&db)?;
    tracing::info!("Final champions declaration reverted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
