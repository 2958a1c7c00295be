use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// How a group event collects scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GroupScoring {
    /// Averaged across all registered judges.
    Judge,
    /// Single aggregate score, no per-judge averaging.
    Quiz,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupEvent {
    pub group_event_id: Uuid,
    pub name: String,
    pub scoring: GroupScoring,
}
