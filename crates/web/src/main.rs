use anyhow::Context;
use axum::{Router, middleware as axum_middleware};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::{ApiKeys, require_api_key};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::registry::handlers::list_sections,
        features::registry::handlers::create_section,
        features::registry::handlers::list_judges,
        features::registry::handlers::create_judge,
        features::registry::handlers::get_points_config,
        features::registry::handlers::update_points_config,
        features::participants::handlers::list_participants,
        features::participants::handlers::get_participant,
        features::participants::handlers::register_participant,
        features::events::handlers::list_events,
        features::events::handlers::create_event,
        features::events::handlers::list_group_events,
        features::events::handlers::create_group_event,
        features::events::handlers::list_group_teams,
        features::events::handlers::create_group_team,
        features::events::handlers::declare_event_results,
        features::events::handlers::revert_event_results,
        features::events::handlers::declare_group_event_results,
        features::events::handlers::revert_group_event_results,
        features::scores::handlers::submit_score,
        features::scores::handlers::list_event_scores,
        features::scores::handlers::lock_event,
        features::scores::handlers::submit_team_score,
        features::scores::handlers::lock_group_event,
        features::leaderboard::handlers::get_leaderboard,
        features::leaderboard::handlers::get_podiums,
        features::champions::handlers::get_champions,
        features::champions::handlers::declare_champions,
        features::champions::handlers::revert_champions,
    ),
    components(
        schemas(
            storage::models::Section,
            storage::models::Judge,
            storage::models::Event,
            storage::models::IndividualScoring,
            storage::models::GroupEvent,
            storage::models::GroupScoring,
            storage::models::GroupTeam,
            storage::models::TeamScore,
            storage::models::Score,
            storage::models::JudgeLock,
            storage::models::GroupLocker,
            storage::models::GroupEventLock,
            storage::models::AgeCategory,
            storage::models::Participant,
            storage::models::PointsConfig,
            storage::models::PointsRow,
            storage::models::ChampionEntry,
            storage::models::FinalChampions,
            storage::dto::registry::CreateSectionRequest,
            storage::dto::registry::CreateJudgeRequest,
            storage::dto::registry::UpdatePointsConfigRequest,
            storage::dto::participant::RegisterParticipantRequest,
            storage::dto::participant::ParticipantResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::CreateGroupEventRequest,
            storage::dto::event::CreateGroupTeamRequest,
            storage::dto::event::DeclareResultRequest,
            storage::dto::score::SubmitScoreRequest,
            storage::dto::score::LockEventRequest,
            storage::dto::score::SubmitTeamScoreRequest,
            storage::dto::score::LockGroupEventRequest,
            storage::dto::leaderboard::Achievement,
            storage::dto::leaderboard::SectionStanding,
            storage::dto::leaderboard::ChurchStanding,
            storage::dto::leaderboard::IndividualStanding,
            storage::dto::leaderboard::PodiumEntry,
            storage::dto::leaderboard::EventPodium,
            storage::dto::leaderboard::GroupPodiumEntry,
            storage::dto::leaderboard::GroupEventPodium,
            storage::dto::leaderboard::PodiumsResponse,
            storage::dto::leaderboard::Leaderboards,
            storage::dto::champions::DeclareChampionsRequest,
            storage::dto::champions::ChampionsResponse,
        )
    ),
    tags(
        (name = "registry", description = "Sections, judges and points configuration"),
        (name = "participants", description = "Participant registration and lookup"),
        (name = "events", description = "Individual and group events, teams, result declaration"),
        (name = "scores", description = "Judge score entry and locking"),
        (name = "leaderboard", description = "Recomputed section, church and individual rankings"),
        (name = "champions", description = "Final champions declaration"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

fn api_router(api_keys: ApiKeys) -> Router<Database> {
    let public = Router::new()
        .nest("/api/registry", features::registry::routes::routes())
        .nest("/api", features::participants::routes::routes())
        .nest("/api", features::events::routes::routes())
        .nest("/api", features::scores::routes::routes())
        .nest("/api", features::leaderboard::routes::routes())
        .nest("/api", features::champions::routes::routes());

    let protected = Router::new()
        .nest("/api/registry", features::registry::routes::admin_routes())
        .nest("/api", features::participants::routes::admin_routes())
        .nest("/api", features::events::routes::admin_routes())
        .nest("/api", features::scores::routes::admin_routes())
        .nest("/api", features::champions::routes::admin_routes())
        .route_layer(axum_middleware::from_fn_with_state(
            api_keys,
            require_api_key,
        ));

    public.merge(protected)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Talent Fest API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new();
    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(api_router(api_keys))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
