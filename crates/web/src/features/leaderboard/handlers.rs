use axum::{Json, extract::State};
use storage::{
    Database,
    dto::leaderboard::{Leaderboards, PodiumsResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Section, church and individual leaderboards recomputed from the current snapshot", body = Leaderboards)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(db): State<Database>) -> Result<Json<Leaderboards>, WebError> {
    Ok(Json(services::get_leaderboards(&db)))
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/podiums",
    responses(
        (status = 200, description = "Per-event top-three extracts for the printable summary", body = PodiumsResponse)
    ),
    tag = "leaderboard"
)]
pub async fn get_podiums(State(db): State<Database>) -> Result<Json<PodiumsResponse>, WebError> {
    Ok(Json(services::get_podiums(&db)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storage::dto::event::CreateEventRequest;
    use storage::dto::participant::RegisterParticipantRequest;
    use storage::dto::registry::{CreateJudgeRequest, CreateSectionRequest};
    use storage::dto::score::{LockEventRequest, SubmitScoreRequest};
    use storage::models::{AgeCategory, IndividualScoring};
    use storage::repository::event::EventRepository;
    use storage::repository::participant::ParticipantRepository;
    use storage::repository::registry::RegistryRepository;
    use storage::repository::score::ScoreRepository;

    fn declared_competition() -> Database {
        let db = Database::new();
        let registry = RegistryRepository::new(&db);
        let section = registry
            .create_section(&CreateSectionRequest {
                name: "North".to_string(),
            })
            .unwrap();
        registry
            .create_judge(&CreateJudgeRequest {
                username: "judge1".to_string(),
                display_name: "Judge One".to_string(),
            })
            .unwrap();

        let event = EventRepository::new(&db)
            .create_event(&CreateEventRequest {
                name: "Recitation".to_string(),
                scoring: IndividualScoring::SingleJudge,
            })
            .unwrap();

        let participant = ParticipantRepository::new(&db)
            .register(&RegisterParticipantRequest {
                name: "Anna".to_string(),
                age: 9,
                gender: "F".to_string(),
                church: "St. Mary".to_string(),
                section_id: section.section_id,
                event_ids: vec![event.event_id],
            })
            .unwrap();

        let scores = ScoreRepository::new(&db);
        scores
            .submit(&SubmitScoreRequest {
                chest_number: participant.chest_number,
                event_id: event.event_id,
                judge_name: "judge1".to_string(),
                criteria: vec![Decimal::from(9); 5],
            })
            .unwrap();
        scores
            .lock_event(&LockEventRequest {
                judge_name: "judge1".to_string(),
                event_id: event.event_id,
                category: AgeCategory::Junior,
            })
            .unwrap();
        EventRepository::new(&db)
            .declare_individual(event.event_id, AgeCategory::Junior)
            .unwrap();

        db
    }

    #[tokio::test]
    async fn leaderboard_endpoint_returns_ranked_boards() {
        let db = declared_competition();

        let Json(boards) = get_leaderboard(State(db)).await.unwrap();

        assert_eq!(boards.sections.len(), 1);
        assert_eq!(boards.sections[0].rank, 1);
        assert_eq!(boards.individuals[0].chest_number, "JR-001");
        assert_eq!(boards.individuals[0].achievements[0].position, "1st");
    }

    #[tokio::test]
    async fn podiums_endpoint_keeps_only_event_extracts() {
        let db = declared_competition();

        let Json(podiums) = get_podiums(State(db)).await.unwrap();

        assert_eq!(podiums.event_podiums.len(), 1);
        assert_eq!(podiums.event_podiums[0].entries[0].average_score, Decimal::from(45));
        assert!(podiums.group_event_podiums.is_empty());
    }
}
