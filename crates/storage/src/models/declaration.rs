use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::participant::AgeCategory;

/// Marks results as published. An event+category pair (or a group event)
/// contributes to rankings only once declared and fully locked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeclaredResult {
    Individual { event_id: Uuid, category: AgeCategory },
    Group { group_event_id: Uuid },
}
