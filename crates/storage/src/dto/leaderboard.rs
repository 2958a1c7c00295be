use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::AgeCategory;

/// A top-three finish attached to a participant's leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub event_name: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SectionStanding {
    pub rank: u32,
    pub section_id: Uuid,
    pub section_name: String,
    /// Individual and group points combined.
    pub total_points: u32,
    /// Group-only share, kept separate so consumers can show the
    /// individual/group split as `total_points - group_points`.
    pub group_points: u32,
    /// Incremented once per qualifying (participant, event) pair, not per
    /// distinct participant.
    pub participant_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChurchStanding {
    pub rank: u32,
    pub church: String,
    pub total_points: u32,
    pub participant_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IndividualStanding {
    pub rank: u32,
    pub participant_id: Uuid,
    pub chest_number: String,
    pub name: String,
    pub category: AgeCategory,
    pub church: String,
    pub section_name: String,
    pub total_points: u32,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PodiumEntry {
    pub position: u32,
    pub chest_number: String,
    pub name: String,
    pub church: String,
    pub section_name: String,
    pub average_score: Decimal,
}

/// Top-three extract for one declared and locked event+category pair,
/// shaped for the printable results summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventPodium {
    pub event_id: Uuid,
    pub event_name: String,
    pub category: AgeCategory,
    pub entries: Vec<PodiumEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupPodiumEntry {
    pub position: u32,
    pub team_name: String,
    pub section_name: String,
    pub score: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupEventPodium {
    pub group_event_id: Uuid,
    pub event_name: String,
    pub entries: Vec<GroupPodiumEntry>,
}

/// The per-event top-three extracts on their own, for the printable
/// results summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PodiumsResponse {
    pub event_podiums: Vec<EventPodium>,
    pub group_event_podiums: Vec<GroupEventPodium>,
}

/// Everything one aggregation pass produces. Ranks in each board ascend
/// from 1 with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Leaderboards {
    pub sections: Vec<SectionStanding>,
    pub churches: Vec<ChurchStanding>,
    pub individuals: Vec<IndividualStanding>,
    pub event_podiums: Vec<EventPodium>,
    pub group_event_podiums: Vec<GroupEventPodium>,
}
