use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    DeclaredResult, Event, GroupEvent, GroupEventLock, GroupTeam, Judge, JudgeLock, Participant,
    PointsConfig, Score, Section,
};

/// One atomic read of every collection the aggregation engine consumes.
/// Leaderboards are a pure function of this value; nothing mutates it
/// mid-computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub sections: Vec<Section>,
    pub judges: Vec<Judge>,
    pub events: Vec<Event>,
    pub group_events: Vec<GroupEvent>,
    pub participants: Vec<Participant>,
    pub scores: Vec<Score>,
    pub group_teams: Vec<GroupTeam>,
    pub judge_locks: Vec<JudgeLock>,
    pub group_event_locks: Vec<GroupEventLock>,
    pub declared_results: Vec<DeclaredResult>,
    pub points_config: PointsConfig,
}

pub struct SnapshotValidator;

impl SnapshotValidator {
    /// Checks a snapshot for structural defects (errors) and dangling
    /// references (warnings). Records behind a warning are silently
    /// excluded during aggregation rather than failing the whole pass.
    pub fn validate(snapshot: &Snapshot) -> ValidationReport {
        let mut report = ValidationReport::default();

        let section_ids: HashSet<Uuid> =
            snapshot.sections.iter().map(|s| s.section_id).collect();
        let event_ids: HashSet<Uuid> = snapshot.events.iter().map(|e| e.event_id).collect();
        let group_event_ids: HashSet<Uuid> = snapshot
            .group_events
            .iter()
            .map(|g| g.group_event_id)
            .collect();
        let participant_ids: HashSet<Uuid> = snapshot
            .participants
            .iter()
            .map(|p| p.participant_id)
            .collect();

        if section_ids.len() != snapshot.sections.len() {
            report.errors.push("Duplicate section id".to_string());
        }
        if event_ids.len() != snapshot.events.len() {
            report.errors.push("Duplicate event id".to_string());
        }
        if group_event_ids.len() != snapshot.group_events.len() {
            report.errors.push("Duplicate group event id".to_string());
        }
        if participant_ids.len() != snapshot.participants.len() {
            report.errors.push("Duplicate participant id".to_string());
        }

        let mut usernames = HashSet::new();
        for judge in &snapshot.judges {
            if !usernames.insert(judge.username.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate judge username: '{}'", judge.username));
            }
        }

        let mut chest_numbers = HashSet::new();
        for participant in &snapshot.participants {
            if !chest_numbers.insert(participant.chest_number.as_str()) {
                report.errors.push(format!(
                    "Duplicate chest number: '{}'",
                    participant.chest_number
                ));
            }
            if !section_ids.contains(&participant.section_id) {
                report.warnings.push(format!(
                    "Participant '{}' references unknown section",
                    participant.chest_number
                ));
            }
            for event_id in &participant.event_ids {
                if !event_ids.contains(event_id) {
                    report.warnings.push(format!(
                        "Participant '{}' entered unknown event {}",
                        participant.chest_number, event_id
                    ));
                }
            }
        }

        for score in &snapshot.scores {
            if !participant_ids.contains(&score.participant_id) {
                report.warnings.push(format!(
                    "Score by '{}' references unknown participant {}",
                    score.judge_name, score.participant_id
                ));
            }
            if !event_ids.contains(&score.event_id) {
                report.warnings.push(format!(
                    "Score by '{}' references unknown event {}",
                    score.judge_name, score.event_id
                ));
            }
        }

        for team in &snapshot.group_teams {
            if !group_event_ids.contains(&team.group_event_id) {
                report.warnings.push(format!(
                    "Team '{}' references unknown group event",
                    team.name
                ));
            }
            if !section_ids.contains(&team.section_id) {
                report
                    .warnings
                    .push(format!("Team '{}' references unknown section", team.name));
            }
        }

        for lock in &snapshot.judge_locks {
            if !event_ids.contains(&lock.event_id) {
                report.warnings.push(format!(
                    "Lock by '{}' references unknown event {}",
                    lock.judge_name, lock.event_id
                ));
            }
        }

        for lock in &snapshot.group_event_locks {
            if !group_event_ids.contains(&lock.group_event_id) {
                report.warnings.push(format!(
                    "Group lock references unknown group event {}",
                    lock.group_event_id
                ));
            }
        }

        for declared in &snapshot.declared_results {
            match declared {
                DeclaredResult::Individual { event_id, .. } => {
                    if !event_ids.contains(event_id) {
                        report.warnings.push(format!(
                            "Declared result references unknown event {}",
                            event_id
                        ));
                    }
                }
                DeclaredResult::Group { group_event_id } => {
                    if !group_event_ids.contains(group_event_id) {
                        report.warnings.push(format!(
                            "Declared result references unknown group event {}",
                            group_event_id
                        ));
                    }
                }
            }
        }

        report
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeCategory, IndividualScoring};
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn participant(chest: &str, section_id: Uuid) -> Participant {
        Participant {
            participant_id: Uuid::new_v4(),
            name: "Test".to_string(),
            age: 12,
            category: AgeCategory::from_age(12),
            gender: "F".to_string(),
            church: "St. Mary".to_string(),
            section_id,
            event_ids: Vec::new(),
            chest_number: chest.to_string(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn duplicate_chest_numbers_are_errors() {
        let section = Section {
            section_id: Uuid::new_v4(),
            name: "North".to_string(),
        };
        let snapshot = Snapshot {
            participants: vec![
                participant("IN-001", section.section_id),
                participant("IN-001", section.section_id),
            ],
            sections: vec![section],
            ..Default::default()
        };

        let report = SnapshotValidator::validate(&snapshot);
        assert!(!report.is_ok());
    }

    #[test]
    fn dangling_score_is_a_warning_not_an_error() {
        let snapshot = Snapshot {
            scores: vec![Score {
                participant_id: Uuid::new_v4(),
                event_id: Uuid::new_v4(),
                judge_name: "judge1".to_string(),
                criteria: vec![Decimal::from(8); 5],
                submitted_at: NaiveDateTime::default(),
            }],
            events: vec![Event {
                event_id: Uuid::new_v4(),
                name: "Solo Song".to_string(),
                scoring: IndividualScoring::AllJudges,
            }],
            ..Default::default()
        };

        let report = SnapshotValidator::validate(&snapshot);
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 2);
    }
}
