use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChampionEntry {
    pub section_id: Uuid,
    pub section_name: String,
    pub total_points: u32,
}

/// Snapshot of the top three sections captured at declaration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FinalChampions {
    pub champion: ChampionEntry,
    pub runner_up: ChampionEntry,
    pub second_runner_up: ChampionEntry,
    pub declared_at: NaiveDateTime,
    pub declared_by: String,
}
