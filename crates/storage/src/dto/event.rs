use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{AgeCategory, GroupScoring, IndividualScoring};

/// Request payload for creating an individual event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub scoring: IndividualScoring,
}

/// Request payload for creating a group event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGroupEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub scoring: GroupScoring,
}

/// Request payload for entering a team into a group event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGroupTeamRequest {
    pub group_event_id: Uuid,

    pub section_id: Uuid,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, message = "A team needs at least one member"))]
    pub members: Vec<String>,
}

/// Body for declaring or reverting an individual event's results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeclareResultRequest {
    pub category: AgeCategory,
}
