use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// How an individual event collects scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum IndividualScoring {
    /// Every registered judge scores every participant.
    AllJudges,
    /// A single judge's score suffices.
    SingleJudge,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub scoring: IndividualScoring,
}
