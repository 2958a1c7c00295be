use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{AgeCategory, CRITERIA_PER_SCORE, CRITERION_MAX, CRITERION_MIN};

/// A judge's score sheet for one participant in one event. Participants are
/// addressed by chest number, the identifier judges actually see.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    #[validate(length(min = 1, max = 16))]
    pub chest_number: String,

    pub event_id: Uuid,

    #[validate(length(min = 1, max = 64))]
    pub judge_name: String,

    #[validate(custom(function = "validate_criteria"))]
    pub criteria: Vec<Decimal>,
}

/// Marks a judge's scores for an event+category as final and immutable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LockEventRequest {
    #[validate(length(min = 1, max = 64))]
    pub judge_name: String,

    pub event_id: Uuid,

    pub category: AgeCategory,
}

/// A score for a team. `judge_name` is required for judge-scored group
/// events and must be absent for quiz events.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitTeamScoreRequest {
    pub team_id: Uuid,

    pub score: Decimal,

    #[validate(length(min = 1, max = 64))]
    pub judge_name: Option<String>,
}

/// Locks a group event for one judge, or as the quiz aggregate when
/// `judge_name` is absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LockGroupEventRequest {
    pub group_event_id: Uuid,

    #[validate(length(min = 1, max = 64))]
    pub judge_name: Option<String>,
}

fn validate_criteria(criteria: &Vec<Decimal>) -> Result<(), validator::ValidationError> {
    if criteria.len() != CRITERIA_PER_SCORE {
        return Err(validator::ValidationError::new("wrong_criteria_count"));
    }

    let min = Decimal::from(CRITERION_MIN);
    let max = Decimal::from(CRITERION_MAX);
    if criteria.iter().any(|c| *c < min || *c > max) {
        return Err(validator::ValidationError::new("criterion_out_of_range"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(criteria: Vec<Decimal>) -> SubmitScoreRequest {
        SubmitScoreRequest {
            chest_number: "JR-001".to_string(),
            event_id: Uuid::new_v4(),
            judge_name: "judge1".to_string(),
            criteria,
        }
    }

    #[test]
    fn five_in_range_criteria_pass() {
        let req = request(vec![Decimal::from(7); 5]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn wrong_count_or_out_of_range_fails() {
        assert!(request(vec![Decimal::from(8); 4]).validate().is_err());
        let mut criteria = vec![Decimal::from(8); 5];
        criteria[2] = Decimal::from(11);
        assert!(request(criteria).validate().is_err());
    }
}
