use storage::{
    Database,
    dto::participant::RegisterParticipantRequest,
    error::Result,
    models::Participant,
    repository::participant::ParticipantRepository,
};

/// Register a participant, deriving category and chest number
pub fn register(db: &Database, request: &RegisterParticipantRequest) -> Result<Participant> {
    ParticipantRepository::new(db).register(request)
}

/// List all participants
pub fn list(db: &Database) -> Vec<Participant> {
    ParticipantRepository::new(db).list()
}

/// Look a participant up by chest number
pub fn find_by_chest_number(db: &Database, chest_number: &str) -> Result<Participant> {
    ParticipantRepository::new(db).find_by_chest_number(chest_number)
}
