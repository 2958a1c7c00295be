use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Judge {
    pub judge_id: Uuid,
    pub username: String,
    pub display_name: String,
}
