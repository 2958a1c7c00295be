use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{PointsConfig, PointsRow};

/// Request payload for registering a section
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSectionRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
}

/// Request payload for registering a judge
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateJudgeRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Username must be between 1 and 64 characters"
    ))]
    pub username: String,

    #[validate(length(min = 1, max = 255))]
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePointsConfigRequest {
    pub individual: PointsRow,
    pub group: PointsRow,
}

impl From<UpdatePointsConfigRequest> for PointsConfig {
    fn from(req: UpdatePointsConfigRequest) -> Self {
        Self {
            individual: req.individual,
            group: req.group,
        }
    }
}
