use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Age band segmenting individual competition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AgeCategory {
    Junior,
    Intermediate,
    Senior,
    SuperSenior,
}

impl AgeCategory {
    pub const ALL: [AgeCategory; 4] = [
        Self::Junior,
        Self::Intermediate,
        Self::Senior,
        Self::SuperSenior,
    ];

    /// Derives the category from a participant's age. Ages outside every
    /// band have no category and are excluded from individual scoring.
    pub fn from_age(age: u8) -> Option<Self> {
        match age {
            6..=10 => Some(Self::Junior),
            11..=15 => Some(Self::Intermediate),
            16..=20 => Some(Self::Senior),
            21..=25 => Some(Self::SuperSenior),
            _ => None,
        }
    }

    pub fn chest_prefix(&self) -> &'static str {
        match self {
            Self::Junior => "JR",
            Self::Intermediate => "IN",
            Self::Senior => "SR",
            Self::SuperSenior => "SS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Intermediate => "Intermediate",
            Self::Senior => "Senior",
            Self::SuperSenior => "Super Senior",
        }
    }
}

/// Chest-number prefix used when a participant's age falls outside every
/// competition band. Such participants keep their registration but never
/// enter an individual ranking.
pub const UNCATEGORIZED_CHEST_PREFIX: &str = "GN";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub name: String,
    pub age: u8,
    pub category: Option<AgeCategory>,
    pub gender: String,
    pub church: String,
    pub section_id: Uuid,
    pub event_ids: Vec<Uuid>,
    pub chest_number: String,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_bands_cover_six_to_twenty_five() {
        assert_eq!(AgeCategory::from_age(6), Some(AgeCategory::Junior));
        assert_eq!(AgeCategory::from_age(10), Some(AgeCategory::Junior));
        assert_eq!(AgeCategory::from_age(11), Some(AgeCategory::Intermediate));
        assert_eq!(AgeCategory::from_age(15), Some(AgeCategory::Intermediate));
        assert_eq!(AgeCategory::from_age(16), Some(AgeCategory::Senior));
        assert_eq!(AgeCategory::from_age(20), Some(AgeCategory::Senior));
        assert_eq!(AgeCategory::from_age(21), Some(AgeCategory::SuperSenior));
        assert_eq!(AgeCategory::from_age(25), Some(AgeCategory::SuperSenior));
    }

    #[test]
    fn ages_outside_bands_have_no_category() {
        assert_eq!(AgeCategory::from_age(5), None);
        assert_eq!(AgeCategory::from_age(26), None);
        assert_eq!(AgeCategory::from_age(0), None);
    }
}
