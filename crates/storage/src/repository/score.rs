use chrono::Utc;
use uuid::Uuid;

use crate::db::Database;
use crate::dto::score::{
    LockEventRequest, LockGroupEventRequest, SubmitScoreRequest, SubmitTeamScoreRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{
    GroupEventLock, GroupLocker, GroupScoring, JudgeLock, Score, TeamScore,
};

pub struct ScoreRepository<'a> {
    db: &'a Database,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Upserts a judge's score sheet for one participant and event. Once
    /// the judge has locked that event+category, the sheet is immutable.
    pub fn submit(&self, req: &SubmitScoreRequest) -> Result<Score> {
        let mut data = self.db.write();

        let participant = data
            .participants
            .iter()
            .find(|p| p.chest_number == req.chest_number)
            .cloned()
            .ok_or(StorageError::NotFound)?;

        if !data.events.iter().any(|e| e.event_id == req.event_id) {
            return Err(StorageError::NotFound);
        }

        let category = participant.category.ok_or_else(|| {
            StorageError::ConstraintViolation(
                "Participant has no age category and cannot be scored".to_string(),
            )
        })?;

        if !participant.event_ids.contains(&req.event_id) {
            return Err(StorageError::ConstraintViolation(
                "Participant is not entered in this event".to_string(),
            ));
        }

        if !data.judges.iter().any(|j| j.username == req.judge_name) {
            return Err(StorageError::ConstraintViolation(
                "Unknown judge".to_string(),
            ));
        }

        let locked = data.judge_locks.iter().any(|l| {
            l.locked
                && l.judge_name == req.judge_name
                && l.event_id == req.event_id
                && l.category == category
        });
        if locked {
            return Err(StorageError::ConstraintViolation(
                "Scores for this event and category are locked".to_string(),
            ));
        }

        let score = Score {
            participant_id: participant.participant_id,
            event_id: req.event_id,
            judge_name: req.judge_name.clone(),
            criteria: req.criteria.clone(),
            submitted_at: Utc::now().naive_utc(),
        };

        let existing = data.scores.iter_mut().find(|s| {
            s.participant_id == score.participant_id
                && s.event_id == score.event_id
                && s.judge_name == score.judge_name
        });
        match existing {
            Some(slot) => *slot = score.clone(),
            None => data.scores.push(score.clone()),
        }

        Ok(score)
    }

    pub fn list_for_event(&self, event_id: Uuid) -> Vec<Score> {
        self.db
            .read()
            .scores
            .iter()
            .filter(|s| s.event_id == event_id)
            .cloned()
            .collect()
    }

    /// Locks a judge's scores for an event+category pair. Locks are
    /// one-way; there is no unlock operation.
    pub fn lock_event(&self, req: &LockEventRequest) -> Result<JudgeLock> {
        let mut data = self.db.write();

        if !data.events.iter().any(|e| e.event_id == req.event_id) {
            return Err(StorageError::NotFound);
        }
        if !data.judges.iter().any(|j| j.username == req.judge_name) {
            return Err(StorageError::ConstraintViolation(
                "Unknown judge".to_string(),
            ));
        }

        let lock = JudgeLock {
            judge_name: req.judge_name.clone(),
            event_id: req.event_id,
            category: req.category,
            locked: true,
            locked_at: Utc::now().naive_utc(),
        };

        let existing = data.judge_locks.iter_mut().find(|l| {
            l.judge_name == lock.judge_name
                && l.event_id == lock.event_id
                && l.category == lock.category
        });
        match existing {
            Some(slot) => *slot = lock.clone(),
            None => data.judge_locks.push(lock.clone()),
        }

        Ok(lock)
    }

    /// Records a score for a team. Judge-scored events upsert one entry per
    /// judge; quiz events hold a single aggregate entry.
    pub fn submit_team_score(&self, req: &SubmitTeamScoreRequest) -> Result<()> {
        let mut data = self.db.write();

        let group_event_id = data
            .group_teams
            .iter()
            .find(|t| t.team_id == req.team_id)
            .map(|t| t.group_event_id)
            .ok_or(StorageError::NotFound)?;

        let scoring = data
            .group_events
            .iter()
            .find(|g| g.group_event_id == group_event_id)
            .map(|g| g.scoring)
            .ok_or(StorageError::NotFound)?;

        let entry = match (scoring, &req.judge_name) {
            (GroupScoring::Quiz, None) => {
                let locked = data.group_event_locks.iter().any(|l| {
                    l.locked && l.group_event_id == group_event_id && l.locker == GroupLocker::Quiz
                });
                if locked {
                    return Err(StorageError::ConstraintViolation(
                        "Quiz score for this event is locked".to_string(),
                    ));
                }
                TeamScore::Quiz { score: req.score }
            }
            (GroupScoring::Judge, Some(judge_name)) => {
                if !data.judges.iter().any(|j| j.username == *judge_name) {
                    return Err(StorageError::ConstraintViolation(
                        "Unknown judge".to_string(),
                    ));
                }
                let locked = data.group_event_locks.iter().any(|l| {
                    l.locked
                        && l.group_event_id == group_event_id
                        && l.locker == GroupLocker::Judge(judge_name.clone())
                });
                if locked {
                    return Err(StorageError::ConstraintViolation(
                        "This judge's scores for the event are locked".to_string(),
                    ));
                }
                TeamScore::Judge {
                    judge_name: judge_name.clone(),
                    score: req.score,
                }
            }
            (GroupScoring::Quiz, Some(_)) => {
                return Err(StorageError::ConstraintViolation(
                    "Quiz events take a single aggregate score, not per-judge scores".to_string(),
                ));
            }
            (GroupScoring::Judge, None) => {
                return Err(StorageError::ConstraintViolation(
                    "Judge-scored events require a judge name".to_string(),
                ));
            }
        };

        let team = data
            .group_teams
            .iter_mut()
            .find(|t| t.team_id == req.team_id)
            .ok_or(StorageError::NotFound)?;

        let slot = team.scores.iter_mut().find(|s| match (s, &entry) {
            (TeamScore::Quiz { .. }, TeamScore::Quiz { .. }) => true,
            (TeamScore::Judge { judge_name: a, .. }, TeamScore::Judge { judge_name: b, .. }) => {
                a == b
            }
            _ => false,
        });
        match slot {
            Some(existing) => *existing = entry,
            None => team.scores.push(entry),
        }

        Ok(())
    }

    pub fn lock_group_event(&self, req: &LockGroupEventRequest) -> Result<GroupEventLock> {
        let mut data = self.db.write();

        if !data
            .group_events
            .iter()
            .any(|g| g.group_event_id == req.group_event_id)
        {
            return Err(StorageError::NotFound);
        }

        let locker = match &req.judge_name {
            Some(judge_name) => {
                if !data.judges.iter().any(|j| j.username == *judge_name) {
                    return Err(StorageError::ConstraintViolation(
                        "Unknown judge".to_string(),
                    ));
                }
                GroupLocker::Judge(judge_name.clone())
            }
            None => GroupLocker::Quiz,
        };

        let lock = GroupEventLock {
            locker,
            group_event_id: req.group_event_id,
            locked: true,
            locked_at: Utc::now().naive_utc(),
        };

        let existing = data
            .group_event_locks
            .iter_mut()
            .find(|l| l.group_event_id == lock.group_event_id && l.locker == lock.locker);
        match existing {
            Some(slot) => *slot = lock.clone(),
            None => data.group_event_locks.push(lock.clone()),
        }

        Ok(lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::event::CreateEventRequest;
    use crate::dto::participant::RegisterParticipantRequest;
    use crate::dto::registry::{CreateJudgeRequest, CreateSectionRequest};
    use crate::models::{AgeCategory, IndividualScoring};
    use crate::repository::event::EventRepository;
    use crate::repository::participant::ParticipantRepository;
    use crate::repository::registry::RegistryRepository;
    use rust_decimal::Decimal;

    fn seeded() -> (Database, String, Uuid) {
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
                name: "Solo Song".to_string(),
                scoring: IndividualScoring::AllJudges,
            })
            .unwrap();

        let participant = ParticipantRepository::new(&db)
            .register(&RegisterParticipantRequest {
                name: "Anna".to_string(),
                age: 8,
                gender: "F".to_string(),
                church: "St. Mary".to_string(),
                section_id: section.section_id,
                event_ids: vec![event.event_id],
            })
            .unwrap();

        (db, participant.chest_number, event.event_id)
    }

    fn sheet(chest: &str, event_id: Uuid, judge: &str) -> SubmitScoreRequest {
        SubmitScoreRequest {
            chest_number: chest.to_string(),
            event_id,
            judge_name: judge.to_string(),
            criteria: vec![Decimal::from(8); 5],
        }
    }

    #[test]
    fn resubmitting_replaces_the_sheet() {
        let (db, chest, event_id) = seeded();
        let repo = ScoreRepository::new(&db);

        repo.submit(&sheet(&chest, event_id, "judge1")).unwrap();
        let mut updated = sheet(&chest, event_id, "judge1");
        updated.criteria = vec![Decimal::from(9); 5];
        repo.submit(&updated).unwrap();

        let scores = repo.list_for_event(event_id);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].total(), Decimal::from(45));
    }

    #[test]
    fn locked_scores_are_immutable() {
        let (db, chest, event_id) = seeded();
        let repo = ScoreRepository::new(&db);

        repo.submit(&sheet(&chest, event_id, "judge1")).unwrap();
        repo.lock_event(&LockEventRequest {
            judge_name: "judge1".to_string(),
            event_id,
            category: AgeCategory::Junior,
        })
        .unwrap();

        let result = repo.submit(&sheet(&chest, event_id, "judge1"));
        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
    }

    #[test]
    fn unknown_judge_is_rejected() {
        let (db, chest, event_id) = seeded();
        let repo = ScoreRepository::new(&db);

        let result = repo.submit(&sheet(&chest, event_id, "impostor"));
        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
    }
}
