use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A score submitted for a team, tagged by its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TeamScore {
    Judge { judge_name: String, score: Decimal },
    Quiz { score: Decimal },
}

impl TeamScore {
    pub fn value(&self) -> Decimal {
        match self {
            Self::Judge { score, .. } => *score,
            Self::Quiz { score } => *score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupTeam {
    pub team_id: Uuid,
    pub group_event_id: Uuid,
    pub section_id: Uuid,
    pub name: String,
    pub members: Vec<String>,
    pub scores: Vec<TeamScore>,
}
