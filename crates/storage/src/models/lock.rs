use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::participant::AgeCategory;

/// A judge's declaration that their scores for an event+category pair are
/// final. Scores behind a lock are immutable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgeLock {
    pub judge_name: String,
    pub event_id: Uuid,
    pub category: AgeCategory,
    pub locked: bool,
    pub locked_at: NaiveDateTime,
}

/// Who placed a group-event lock: a named judge, or the quiz marker for
/// events scored by a single aggregate submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GroupLocker {
    Judge(String),
    Quiz,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupEventLock {
    pub locker: GroupLocker,
    pub group_event_id: Uuid,
    pub locked: bool,
    pub locked_at: NaiveDateTime,
}
