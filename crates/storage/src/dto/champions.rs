use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::FinalChampions;

/// Request payload for declaring the final champions
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeclareChampionsRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Declaring actor must be between 1 and 255 characters"
    ))]
    pub declared_by: String,
}

/// Current state of the champions declaration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChampionsResponse {
    pub declared: bool,
    pub champions: Option<FinalChampions>,
}

impl From<Option<FinalChampions>> for ChampionsResponse {
    fn from(champions: Option<FinalChampions>) -> Self {
        Self {
            declared: champions.is_some(),
            champions,
        }
    }
}
