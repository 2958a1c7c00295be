use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::leaderboard::{
    Achievement, ChurchStanding, EventPodium, GroupEventPodium, GroupPodiumEntry,
    IndividualStanding, Leaderboards, PodiumEntry, SectionStanding,
};
use crate::models::{
    AgeCategory, DeclaredResult, GroupEvent, GroupScoring, GroupTeam, Participant, Score,
    TeamScore,
};
use crate::services::locks::LockResolver;
use crate::snapshot::Snapshot;

#[derive(Default)]
struct SectionAcc {
    total: u32,
    group: u32,
    count: u32,
}

#[derive(Default)]
struct ChurchAcc {
    total: u32,
    count: u32,
}

#[derive(Default)]
struct IndividualAcc {
    total: u32,
    achievements: Vec<Achievement>,
}

struct RankedParticipant<'a> {
    participant: &'a Participant,
    average: Decimal,
}

struct RankedTeam<'a> {
    team: &'a GroupTeam,
    section_name: &'a str,
    score: Decimal,
}

/// Recomputes all leaderboards from scratch. Pure function of the
/// snapshot: point totals are never mutated incrementally, so identical
/// inputs always yield identical outputs.
///
/// An event+category pair contributes iff it is declared and fully locked;
/// a group event contributes iff declared and locked per its scoring type.
/// Records with dangling references are skipped, never fatal.
pub fn compute(snapshot: &Snapshot) -> Leaderboards {
    let mut locks = LockResolver::new(snapshot);

    let sections_by_id: HashMap<Uuid, &str> = snapshot
        .sections
        .iter()
        .map(|s| (s.section_id, s.name.as_str()))
        .collect();
    let participants_by_id: HashMap<Uuid, &Participant> = snapshot
        .participants
        .iter()
        .map(|p| (p.participant_id, p))
        .collect();
    let event_ids: HashSet<Uuid> = snapshot.events.iter().map(|e| e.event_id).collect();

    let mut declared_individual: HashSet<(Uuid, AgeCategory)> = HashSet::new();
    let mut declared_group: HashSet<Uuid> = HashSet::new();
    for declared in &snapshot.declared_results {
        match declared {
            DeclaredResult::Individual { event_id, category } => {
                declared_individual.insert((*event_id, *category));
            }
            DeclaredResult::Group { group_event_id } => {
                declared_group.insert(*group_event_id);
            }
        }
    }

    // Score sheets grouped by (event, participant). Sheets pointing at an
    // unknown event or participant are dropped here.
    let mut sheets: HashMap<(Uuid, Uuid), Vec<&Score>> = HashMap::new();
    for score in &snapshot.scores {
        if event_ids.contains(&score.event_id)
            && participants_by_id.contains_key(&score.participant_id)
        {
            sheets
                .entry((score.event_id, score.participant_id))
                .or_default()
                .push(score);
        }
    }

    let mut section_acc: HashMap<Uuid, SectionAcc> = HashMap::new();
    let mut church_acc: HashMap<&str, ChurchAcc> = HashMap::new();
    let mut individual_acc: HashMap<Uuid, IndividualAcc> = HashMap::new();
    let mut event_podiums = Vec::new();
    let mut group_event_podiums = Vec::new();

    for event in &snapshot.events {
        for category in AgeCategory::ALL {
            if !declared_individual.contains(&(event.event_id, category)) {
                continue;
            }
            if !locks.individual_locked(event.event_id, category, event.scoring) {
                continue;
            }

            let ranking =
                rank_individual_event(snapshot, event.event_id, category, &sheets, &sections_by_id);
            if ranking.is_empty() {
                continue;
            }

            for (index, entry) in ranking.iter().take(3).enumerate() {
                let rank = index + 1;
                let points = snapshot.points_config.individual.for_rank(rank);
                let participant = entry.participant;

                let acc = individual_acc
                    .entry(participant.participant_id)
                    .or_default();
                acc.total += points;
                acc.achievements.push(Achievement {
                    event_name: event.name.clone(),
                    position: ordinal(rank),
                });

                let section = section_acc.entry(participant.section_id).or_default();
                section.total += points;
                section.count += 1;

                let church = church_acc.entry(participant.church.as_str()).or_default();
                church.total += points;
                church.count += 1;
            }

            event_podiums.push(EventPodium {
                event_id: event.event_id,
                event_name: event.name.clone(),
                category,
                entries: ranking
                    .iter()
                    .take(3)
                    .enumerate()
                    .map(|(index, entry)| PodiumEntry {
                        position: (index + 1) as u32,
                        chest_number: entry.participant.chest_number.clone(),
                        name: entry.participant.name.clone(),
                        church: entry.participant.church.clone(),
                        section_name: sections_by_id
                            .get(&entry.participant.section_id)
                            .map_or_else(String::new, |s| s.to_string()),
                        average_score: entry.average,
                    })
                    .collect(),
            });
        }
    }

    for group_event in &snapshot.group_events {
        if !declared_group.contains(&group_event.group_event_id) {
            continue;
        }
        if !locks.group_locked(group_event.group_event_id, group_event.scoring) {
            continue;
        }

        let ranking = rank_group_event(snapshot, group_event, &sections_by_id);
        if ranking.is_empty() {
            continue;
        }

        for (index, entry) in ranking.iter().take(3).enumerate() {
            let points = snapshot.points_config.group.for_rank(index + 1);
            let section = section_acc.entry(entry.team.section_id).or_default();
            section.total += points;
            section.group += points;
        }

        group_event_podiums.push(GroupEventPodium {
            group_event_id: group_event.group_event_id,
            event_name: group_event.name.clone(),
            entries: ranking
                .iter()
                .take(3)
                .enumerate()
                .map(|(index, entry)| GroupPodiumEntry {
                    position: (index + 1) as u32,
                    team_name: entry.team.name.clone(),
                    section_name: entry.section_name.to_string(),
                    score: entry.score,
                })
                .collect(),
        });
    }

    let mut sections: Vec<SectionStanding> = section_acc
        .into_iter()
        .filter(|(_, acc)| acc.count > 0 || acc.group > 0)
        .filter_map(|(section_id, acc)| {
            let name = sections_by_id.get(&section_id)?;
            Some(SectionStanding {
                rank: 0,
                section_id,
                section_name: name.to_string(),
                total_points: acc.total,
                group_points: acc.group,
                participant_count: acc.count,
            })
        })
        .collect();
    sections.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.section_name.cmp(&b.section_name))
            .then_with(|| a.section_id.cmp(&b.section_id))
    });
    for (index, standing) in sections.iter_mut().enumerate() {
        standing.rank = (index + 1) as u32;
    }

    // Churches aggregate by display name only; identically named churches
    // in different sections merge into one row.
    let mut churches: Vec<ChurchStanding> = church_acc
        .into_iter()
        .map(|(church, acc)| ChurchStanding {
            rank: 0,
            church: church.to_string(),
            total_points: acc.total,
            participant_count: acc.count,
        })
        .collect();
    churches.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.church.cmp(&b.church))
    });
    for (index, standing) in churches.iter_mut().enumerate() {
        standing.rank = (index + 1) as u32;
    }

    let mut individuals: Vec<IndividualStanding> = individual_acc
        .into_iter()
        .filter_map(|(participant_id, acc)| {
            let participant = participants_by_id.get(&participant_id)?;
            Some(IndividualStanding {
                rank: 0,
                participant_id,
                chest_number: participant.chest_number.clone(),
                name: participant.name.clone(),
                category: participant.category?,
                church: participant.church.clone(),
                section_name: sections_by_id
                    .get(&participant.section_id)
                    .map_or_else(String::new, |s| s.to_string()),
                total_points: acc.total,
                achievements: acc.achievements,
            })
        })
        .collect();
    individuals.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.participant_id.cmp(&b.participant_id))
    });
    for (index, standing) in individuals.iter_mut().enumerate() {
        standing.rank = (index + 1) as u32;
    }

    Leaderboards {
        sections,
        churches,
        individuals,
        event_podiums,
        group_event_podiums,
    }
}

/// Ranks one event+category pair. Participants without a submitted sheet,
/// or whose section reference does not resolve, are excluded. Ties on the
/// average break by participant id ascending.
fn rank_individual_event<'a>(
    snapshot: &'a Snapshot,
    event_id: Uuid,
    category: AgeCategory,
    sheets: &HashMap<(Uuid, Uuid), Vec<&'a Score>>,
    sections_by_id: &HashMap<Uuid, &'a str>,
) -> Vec<RankedParticipant<'a>> {
    let mut entries: Vec<RankedParticipant> = snapshot
        .participants
        .iter()
        .filter(|p| p.category == Some(category) && p.event_ids.contains(&event_id))
        .filter(|p| sections_by_id.contains_key(&p.section_id))
        .filter_map(|participant| {
            let judged = sheets.get(&(event_id, participant.participant_id))?;
            let sum: Decimal = judged.iter().map(|s| s.total()).sum();
            let average = (sum / Decimal::from(judged.len())).round_dp(2);
            Some(RankedParticipant {
                participant,
                average,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.average.cmp(&a.average).then_with(|| {
            a.participant
                .participant_id
                .cmp(&b.participant.participant_id)
        })
    });
    entries
}

/// Ranks one group event. Quiz teams score their single aggregate entry;
/// judge-scored teams average every submitted entry. Teams with no score,
/// or with an unresolvable section, are excluded rather than ranked last.
fn rank_group_event<'a>(
    snapshot: &'a Snapshot,
    group_event: &GroupEvent,
    sections_by_id: &HashMap<Uuid, &'a str>,
) -> Vec<RankedTeam<'a>> {
    let mut entries: Vec<RankedTeam> = snapshot
        .group_teams
        .iter()
        .filter(|t| t.group_event_id == group_event.group_event_id)
        .filter_map(|team| {
            let section_name = sections_by_id.get(&team.section_id)?;
            let score = match group_event.scoring {
                GroupScoring::Quiz => team.scores.iter().find_map(|s| match s {
                    TeamScore::Quiz { score } => Some(*score),
                    TeamScore::Judge { .. } => None,
                })?,
                GroupScoring::Judge => {
                    if team.scores.is_empty() {
                        return None;
                    }
                    let sum: Decimal = team.scores.iter().map(TeamScore::value).sum();
                    (sum / Decimal::from(team.scores.len())).round_dp(2)
                }
            };
            Some(RankedTeam {
                team,
                section_name,
                score,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.team.team_id.cmp(&b.team.team_id))
    });
    entries
}

fn ordinal(rank: usize) -> String {
    match rank {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Event, GroupEventLock, GroupLocker, IndividualScoring, Judge, JudgeLock, PointsConfig,
        PointsRow, Section,
    };
    use chrono::NaiveDateTime;

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn section(n: u128, name: &str) -> Section {
        Section {
            section_id: id(n),
            name: name.to_string(),
        }
    }

    fn judge(username: &str) -> Judge {
        Judge {
            judge_id: Uuid::new_v4(),
            username: username.to_string(),
            display_name: username.to_string(),
        }
    }

    fn participant(n: u128, name: &str, section: u128, church: &str, events: &[u128]) -> Participant {
        Participant {
            participant_id: id(n),
            name: name.to_string(),
            age: 12,
            category: Some(AgeCategory::Intermediate),
            gender: "F".to_string(),
            church: church.to_string(),
            section_id: id(section),
            event_ids: events.iter().copied().map(id).collect(),
            chest_number: format!("IN-{n:03}"),
            created_at: NaiveDateTime::default(),
        }
    }

    fn sheet(participant: u128, event: u128, judge: &str, total: u32) -> Score {
        Score {
            participant_id: id(participant),
            event_id: id(event),
            judge_name: judge.to_string(),
            criteria: vec![Decimal::from(total)],
            submitted_at: NaiveDateTime::default(),
        }
    }

    fn lock(judge: &str, event: u128, category: AgeCategory) -> JudgeLock {
        JudgeLock {
            judge_name: judge.to_string(),
            event_id: id(event),
            category,
            locked: true,
            locked_at: NaiveDateTime::default(),
        }
    }

    fn points(first: u32, second: u32, third: u32) -> PointsRow {
        PointsRow {
            first,
            second,
            third,
        }
    }

    /// One section, one single-judge event, four participants with
    /// averages [90, 85, 85, 70].
    fn single_event_snapshot() -> Snapshot {
        Snapshot {
            sections: vec![section(1, "North")],
            judges: vec![judge("judge1")],
            events: vec![Event {
                event_id: id(100),
                name: "Solo Song".to_string(),
                scoring: IndividualScoring::SingleJudge,
            }],
            participants: vec![
                participant(1, "Anna", 1, "St. Mary", &[100]),
                participant(2, "Beth", 1, "St. Mary", &[100]),
                participant(3, "Cara", 1, "St. Thomas", &[100]),
                participant(4, "Dina", 1, "St. Thomas", &[100]),
            ],
            scores: vec![
                sheet(1, 100, "judge1", 90),
                sheet(2, 100, "judge1", 85),
                sheet(3, 100, "judge1", 85),
                sheet(4, 100, "judge1", 70),
            ],
            judge_locks: vec![lock("judge1", 100, AgeCategory::Intermediate)],
            declared_results: vec![DeclaredResult::Individual {
                event_id: id(100),
                category: AgeCategory::Intermediate,
            }],
            points_config: PointsConfig {
                individual: points(5, 3, 1),
                group: points(10, 5, 3),
            },
            ..Default::default()
        }
    }

    fn quiz_snapshot() -> Snapshot {
        Snapshot {
            sections: vec![section(1, "North"), section(2, "South")],
            judges: vec![judge("judge1")],
            group_events: vec![GroupEvent {
                group_event_id: id(200),
                name: "Bible Quiz".to_string(),
                scoring: GroupScoring::Quiz,
            }],
            group_teams: vec![
                GroupTeam {
                    team_id: id(21),
                    group_event_id: id(200),
                    section_id: id(1),
                    name: "North Quizzers".to_string(),
                    members: vec!["Anna".to_string()],
                    scores: vec![TeamScore::Quiz {
                        score: Decimal::from(42),
                    }],
                },
                GroupTeam {
                    team_id: id(22),
                    group_event_id: id(200),
                    section_id: id(2),
                    name: "South Quizzers".to_string(),
                    members: vec!["Beth".to_string()],
                    scores: Vec::new(),
                },
            ],
            group_event_locks: vec![GroupEventLock {
                locker: GroupLocker::Quiz,
                group_event_id: id(200),
                locked: true,
                locked_at: NaiveDateTime::default(),
            }],
            declared_results: vec![DeclaredResult::Group {
                group_event_id: id(200),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn points_follow_rank_with_ties_kept_in_id_order() {
        let boards = compute(&single_event_snapshot());

        let podium = &boards.event_podiums[0];
        assert_eq!(podium.entries.len(), 3);
        assert_eq!(podium.entries[0].name, "Anna");
        assert_eq!(podium.entries[1].name, "Beth");
        assert_eq!(podium.entries[2].name, "Cara");

        let by_name: HashMap<&str, u32> = boards
            .individuals
            .iter()
            .map(|i| (i.name.as_str(), i.total_points))
            .collect();
        assert_eq!(by_name["Anna"], 5);
        assert_eq!(by_name["Beth"], 3);
        assert_eq!(by_name["Cara"], 1);
        assert!(!by_name.contains_key("Dina"));

        let anna = &boards.individuals[0];
        assert_eq!(anna.rank, 1);
        assert_eq!(anna.achievements.len(), 1);
        assert_eq!(anna.achievements[0].position, "1st");
        assert_eq!(anna.achievements[0].event_name, "Solo Song");
    }

    #[test]
    fn recomputation_is_idempotent() {
        let snapshot = single_event_snapshot();
        assert_eq!(compute(&snapshot), compute(&snapshot));
    }

    #[test]
    fn undeclared_results_contribute_nothing() {
        let mut snapshot = single_event_snapshot();
        snapshot.declared_results.clear();

        let boards = compute(&snapshot);
        assert!(boards.sections.is_empty());
        assert!(boards.churches.is_empty());
        assert!(boards.individuals.is_empty());
        assert!(boards.event_podiums.is_empty());
    }

    #[test]
    fn unlocked_results_contribute_nothing() {
        let mut snapshot = single_event_snapshot();
        snapshot.judge_locks.clear();

        let boards = compute(&snapshot);
        assert!(boards.sections.is_empty());
        assert!(boards.individuals.is_empty());
    }

    #[test]
    fn quiz_team_scores_its_single_entry_and_scoreless_teams_are_excluded() {
        let boards = compute(&quiz_snapshot());

        let podium = &boards.group_event_podiums[0];
        assert_eq!(podium.entries.len(), 1);
        assert_eq!(podium.entries[0].team_name, "North Quizzers");
        assert_eq!(podium.entries[0].score, Decimal::from(42));

        // South entered a team but never submitted a quiz score, so it
        // must not appear at all, not even ranked last with zero.
        assert_eq!(boards.sections.len(), 1);
        assert_eq!(boards.sections[0].section_name, "North");
    }

    #[test]
    fn section_totals_split_individual_and_group_points() {
        let mut snapshot = single_event_snapshot();
        let quiz = quiz_snapshot();
        snapshot.group_events = quiz.group_events;
        snapshot.group_teams = quiz.group_teams;
        snapshot.group_event_locks = quiz.group_event_locks;
        snapshot
            .declared_results
            .push(DeclaredResult::Group {
                group_event_id: id(200),
            });

        let boards = compute(&snapshot);
        let north = &boards.sections[0];
        assert_eq!(north.section_name, "North");
        // 5 + 3 + 1 individual points, 10 group points for first place.
        assert_eq!(north.total_points, 19);
        assert_eq!(north.group_points, 10);
        assert_eq!(north.total_points - north.group_points, 9);
        assert_eq!(north.participant_count, 3);
    }

    #[test]
    fn church_rows_merge_by_display_name() {
        let boards = compute(&single_event_snapshot());

        assert_eq!(boards.churches.len(), 2);
        let st_mary = &boards.churches[0];
        assert_eq!(st_mary.church, "St. Mary");
        assert_eq!(st_mary.total_points, 8);
        assert_eq!(st_mary.participant_count, 2);
        let st_thomas = &boards.churches[1];
        assert_eq!(st_thomas.total_points, 1);
    }

    #[test]
    fn all_judges_average_spans_every_sheet() {
        let mut snapshot = single_event_snapshot();
        snapshot.judges.push(judge("judge2"));
        snapshot.events[0].scoring = IndividualScoring::AllJudges;
        snapshot.scores = vec![
            sheet(1, 100, "judge1", 80),
            sheet(1, 100, "judge2", 90),
            sheet(2, 100, "judge1", 70),
            sheet(2, 100, "judge2", 75),
        ];
        snapshot.judge_locks = vec![
            lock("judge1", 100, AgeCategory::Intermediate),
            lock("judge2", 100, AgeCategory::Intermediate),
        ];

        let boards = compute(&snapshot);
        let podium = &boards.event_podiums[0];
        assert_eq!(podium.entries[0].average_score, Decimal::from(85));
        assert_eq!(podium.entries[1].average_score, Decimal::new(725, 1));
    }

    #[test]
    fn dangling_references_are_skipped_silently() {
        let mut snapshot = single_event_snapshot();
        // A sheet for a participant that no longer exists.
        snapshot.scores.push(sheet(99, 100, "judge1", 100));
        // A team pointing at an unknown section.
        snapshot.group_events = vec![GroupEvent {
            group_event_id: id(200),
            name: "Bible Quiz".to_string(),
            scoring: GroupScoring::Quiz,
        }];
        snapshot.group_teams = vec![GroupTeam {
            team_id: id(21),
            group_event_id: id(200),
            section_id: id(77),
            name: "Ghost Team".to_string(),
            members: Vec::new(),
            scores: vec![TeamScore::Quiz {
                score: Decimal::from(50),
            }],
        }];
        snapshot.group_event_locks = vec![GroupEventLock {
            locker: GroupLocker::Quiz,
            group_event_id: id(200),
            locked: true,
            locked_at: NaiveDateTime::default(),
        }];
        snapshot.declared_results.push(DeclaredResult::Group {
            group_event_id: id(200),
        });

        let boards = compute(&snapshot);
        assert_eq!(boards.event_podiums[0].entries[0].name, "Anna");
        assert!(boards.group_event_podiums.is_empty());
        assert_eq!(boards.sections[0].group_points, 0);
    }
}
