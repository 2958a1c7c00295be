use chrono::Utc;
use uuid::Uuid;

use crate::db::Database;
use crate::dto::participant::RegisterParticipantRequest;
use crate::error::{Result, StorageError};
use crate::models::{AgeCategory, Participant, UNCATEGORIZED_CHEST_PREFIX};

pub struct ParticipantRepository<'a> {
    db: &'a Database,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Registers a participant, deriving the age category and allocating
    /// the next chest number in that category's sequence.
    pub fn register(&self, req: &RegisterParticipantRequest) -> Result<Participant> {
        let mut data = self.db.write();

        if !data.sections.iter().any(|s| s.section_id == req.section_id) {
            return Err(StorageError::ConstraintViolation(
                "Unknown section".to_string(),
            ));
        }

        for event_id in &req.event_ids {
            if !data.events.iter().any(|e| e.event_id == *event_id) {
                return Err(StorageError::ConstraintViolation(format!(
                    "Unknown event {event_id}"
                )));
            }
        }

        let category = AgeCategory::from_age(req.age);
        let prefix = category.map_or(UNCATEGORIZED_CHEST_PREFIX, |c| c.chest_prefix());
        let chest_number = next_chest_number(prefix, &data.participants);

        let participant = Participant {
            participant_id: Uuid::new_v4(),
            name: req.name.clone(),
            age: req.age,
            category,
            gender: req.gender.clone(),
            church: req.church.clone(),
            section_id: req.section_id,
            event_ids: req.event_ids.clone(),
            chest_number,
            created_at: Utc::now().naive_utc(),
        };
        data.participants.push(participant.clone());

        Ok(participant)
    }

    pub fn list(&self) -> Vec<Participant> {
        self.db.read().participants.clone()
    }

    pub fn find_by_chest_number(&self, chest_number: &str) -> Result<Participant> {
        self.db
            .read()
            .participants
            .iter()
            .find(|p| p.chest_number == chest_number)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

/// Chest numbers are `<prefix>-<3-digit-sequence>`, unique within a
/// category and assigned monotonically.
fn next_chest_number(prefix: &str, participants: &[Participant]) -> String {
    let next = participants
        .iter()
        .filter_map(|p| {
            p.chest_number
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('-'))
                .and_then(|seq| seq.parse::<u32>().ok())
        })
        .max()
        .map_or(1, |highest| highest + 1);

    format!("{prefix}-{next:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::registry::CreateSectionRequest;
    use crate::repository::registry::RegistryRepository;

    fn seeded_db() -> (Database, Uuid) {
        let db = Database::new();
        let section = RegistryRepository::new(&db)
            .create_section(&CreateSectionRequest {
                name: "North".to_string(),
            })
            .unwrap();
        (db, section.section_id)
    }

    fn request(name: &str, age: u8, section_id: Uuid) -> RegisterParticipantRequest {
        RegisterParticipantRequest {
            name: name.to_string(),
            age,
            gender: "F".to_string(),
            church: "St. Mary".to_string(),
            section_id,
            event_ids: Vec::new(),
        }
    }

    #[test]
    fn chest_numbers_are_monotonic_within_a_category() {
        let (db, section_id) = seeded_db();
        let repo = ParticipantRepository::new(&db);

        let first = repo.register(&request("Anna", 8, section_id)).unwrap();
        let second = repo.register(&request("Beth", 9, section_id)).unwrap();
        let senior = repo.register(&request("Cara", 17, section_id)).unwrap();

        assert_eq!(first.chest_number, "JR-001");
        assert_eq!(second.chest_number, "JR-002");
        assert_eq!(senior.chest_number, "SR-001");
    }

    #[test]
    fn out_of_band_age_gets_no_category() {
        let (db, section_id) = seeded_db();
        let repo = ParticipantRepository::new(&db);

        let grown_up = repo.register(&request("Dina", 30, section_id)).unwrap();

        assert_eq!(grown_up.category, None);
        assert_eq!(grown_up.chest_number, "GN-001");
    }

    #[test]
    fn unknown_section_is_rejected() {
        let (db, _) = seeded_db();
        let repo = ParticipantRepository::new(&db);

        let result = repo.register(&request("Eve", 12, Uuid::new_v4()));
        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
    }

    #[test]
    fn lookup_by_chest_number() {
        let (db, section_id) = seeded_db();
        let repo = ParticipantRepository::new(&db);
        repo.register(&request("Fay", 13, section_id)).unwrap();

        assert_eq!(repo.find_by_chest_number("IN-001").unwrap().name, "Fay");
        assert!(matches!(
            repo.find_by_chest_number("IN-999"),
            Err(StorageError::NotFound)
        ));
    }
}
