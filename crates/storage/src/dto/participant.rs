use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{AgeCategory, Participant};

/// Request payload for registering a participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterParticipantRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, max = 99, message = "Age must be between 1 and 99"))]
    pub age: u8,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(length(min = 1, max = 255))]
    pub church: String,

    pub section_id: Uuid,

    #[serde(default)]
    pub event_ids: Vec<Uuid>,
}

/// Response containing participant details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub chest_number: String,
    pub name: String,
    pub age: u8,
    pub category: Option<AgeCategory>,
    pub category_label: Option<String>,
    pub gender: String,
    pub church: String,
    pub section_id: Uuid,
    pub event_ids: Vec<Uuid>,
    pub created_at: NaiveDateTime,
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    if gender == "M" || gender == "F" {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            participant_id: p.participant_id,
            chest_number: p.chest_number,
            name: p.name,
            age: p.age,
            category: p.category,
            category_label: p.category.map(|c| c.label().to_string()),
            gender: p.gender,
            church: p.church,
            section_id: p.section_id,
            event_ids: p.event_ids,
            created_at: p.created_at,
        }
    }
}
