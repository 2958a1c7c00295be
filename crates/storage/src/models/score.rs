use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const CRITERIA_PER_SCORE: usize = 5;
pub const CRITERION_MIN: u32 = 7;
pub const CRITERION_MAX: u32 = 10;

/// One judge's score sheet for one participant in one event.
/// Identity is the (participant, event, judge) triple.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Score {
    pub participant_id: Uuid,
    pub event_id: Uuid,
    pub judge_name: String,
    pub criteria: Vec<Decimal>,
    pub submitted_at: NaiveDateTime,
}

impl Score {
    pub fn total(&self) -> Decimal {
        self.criteria.iter().copied().sum()
    }
}
