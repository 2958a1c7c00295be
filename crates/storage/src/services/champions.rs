use chrono::Utc;

use crate::db::Database;
use crate::dto::leaderboard::SectionStanding;
use crate::error::{Result, StorageError};
use crate::models::{ChampionEntry, FinalChampions};
use crate::repository::champions::ChampionsRepository;
use crate::services::leaderboard;

/// Captures the current top three sections as the final champions.
/// Requires at least three sections with a non-zero standing; otherwise the
/// declaration is rejected and the state stays untouched.
pub fn declare(db: &Database, declared_by: &str) -> Result<FinalChampions> {
    let snapshot = db.snapshot();
    let boards = leaderboard::compute(&snapshot);

    let qualifying: Vec<&SectionStanding> = boards
        .sections
        .iter()
        .filter(|s| s.total_points > 0)
        .collect();

    if qualifying.len() < 3 {
        return Err(StorageError::PreconditionFailed(
            "At least 3 sections with points are required to declare champions".to_string(),
        ));
    }

    let champions = FinalChampions {
        champion: entry(qualifying[0]),
        runner_up: entry(qualifying[1]),
        second_runner_up: entry(qualifying[2]),
        declared_at: Utc::now().naive_utc(),
        declared_by: declared_by.to_string(),
    };

    ChampionsRepository::new(db).save(champions.clone());

    Ok(champions)
}

/// Clears the declaration and its snapshot.
pub fn revert(db: &Database) -> Result<()> {
    ChampionsRepository::new(db).clear()
}

pub fn current(db: &Database) -> Option<FinalChampions> {
    ChampionsRepository::new(db).get()
}

fn entry(standing: &SectionStanding) -> ChampionEntry {
    ChampionEntry {
        section_id: standing.section_id,
        section_name: standing.section_name.clone(),
        total_points: standing.total_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::event::CreateEventRequest;
    use crate::dto::participant::RegisterParticipantRequest;
    use crate::dto::registry::{CreateJudgeRequest, CreateSectionRequest};
    use crate::dto::score::{LockEventRequest, SubmitScoreRequest};
    use crate::models::{AgeCategory, IndividualScoring};
    use crate::repository::event::EventRepository;
    use crate::repository::participant::ParticipantRepository;
    use crate::repository::registry::RegistryRepository;
    use crate::repository::score::ScoreRepository;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    /// Seeds one declared, locked, single-judge event where the top three
    /// finishers come from three different sections.
    fn competition_with_sections(count: usize) -> Database {
        let db = Database::new();
        let registry = RegistryRepository::new(&db);
        registry
            .create_judge(&CreateJudgeRequest {
                username: "judge1".to_string(),
                display_name: "Judge One".to_string(),
            })
            .unwrap();

        let event = EventRepository::new(&db)
            .create_event(&CreateEventRequest {
                name: "Solo Song".to_string(),
                scoring: IndividualScoring::SingleJudge,
            })
            .unwrap();

        let mut section_ids: Vec<Uuid> = Vec::new();
        for index in 0..count {
            let section = registry
                .create_section(&CreateSectionRequest {
                    name: format!("Section {index}"),
                })
                .unwrap();
            section_ids.push(section.section_id);
        }

        let participants = ParticipantRepository::new(&db);
        let scores = ScoreRepository::new(&db);
        for (index, section_id) in section_ids.iter().enumerate() {
            let registered = participants
                .register(&RegisterParticipantRequest {
                    name: format!("Singer {index}"),
                    age: 12,
                    gender: "F".to_string(),
                    church: format!("Church {index}"),
                    section_id: *section_id,
                    event_ids: vec![event.event_id],
                })
                .unwrap();
            scores
                .submit(&SubmitScoreRequest {
                    chest_number: registered.chest_number,
                    event_id: event.event_id,
                    judge_name: "judge1".to_string(),
                    criteria: vec![Decimal::from(10 - index as u32 % 4); 5],
                })
                .unwrap();
        }

        scores
            .lock_event(&LockEventRequest {
                judge_name: "judge1".to_string(),
                event_id: event.event_id,
                category: AgeCategory::Intermediate,
            })
            .unwrap();
        EventRepository::new(&db)
            .declare_individual(event.event_id, AgeCategory::Intermediate)
            .unwrap();

        db
    }

    #[test]
    fn declaring_with_fewer_than_three_sections_is_rejected() {
        let db = competition_with_sections(2);

        let result = declare(&db, "admin");
        assert!(matches!(result, Err(StorageError::PreconditionFailed(_))));
        assert!(current(&db).is_none());
    }

    #[test]
    fn declaring_captures_the_top_three_snapshot() {
        let db = competition_with_sections(3);

        let champions = declare(&db, "admin").unwrap();
        assert_eq!(champions.declared_by, "admin");
        assert_eq!(champions.champion.section_name, "Section 0");
        assert!(champions.champion.total_points >= champions.runner_up.total_points);
        assert_eq!(current(&db), Some(champions));
    }

    #[test]
    fn revert_returns_to_not_declared() {
        let db = competition_with_sections(3);
        declare(&db, "admin").unwrap();

        revert(&db).unwrap();
        assert!(current(&db).is_none());
        assert!(matches!(
            revert(&db),
            Err(StorageError::PreconditionFailed(_))
        ));
    }
}
