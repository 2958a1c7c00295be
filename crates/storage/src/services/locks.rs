use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::{AgeCategory, GroupLocker, GroupScoring, IndividualScoring};
use crate::snapshot::Snapshot;

/// Answers "is this event eligible for ranking yet?" over one snapshot.
/// Results are memoized per key; lock state cannot change mid-pass.
pub struct LockResolver<'a> {
    snapshot: &'a Snapshot,
    judge_usernames: HashSet<&'a str>,
    individual: HashMap<(Uuid, AgeCategory), bool>,
    group: HashMap<Uuid, bool>,
}

impl<'a> LockResolver<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        let judge_usernames = snapshot
            .judges
            .iter()
            .map(|j| j.username.as_str())
            .collect();

        Self {
            snapshot,
            judge_usernames,
            individual: HashMap::new(),
            group: HashMap::new(),
        }
    }

    /// Single-judge events lock on any matching record; all-judges events
    /// need every registered judge locked. Locks by unregistered judges
    /// are ignored.
    pub fn individual_locked(
        &mut self,
        event_id: Uuid,
        category: AgeCategory,
        scoring: IndividualScoring,
    ) -> bool {
        if let Some(&cached) = self.individual.get(&(event_id, category)) {
            return cached;
        }

        let locked = match scoring {
            IndividualScoring::SingleJudge => self
                .snapshot
                .judge_locks
                .iter()
                .any(|l| l.locked && l.event_id == event_id && l.category == category),
            IndividualScoring::AllJudges => {
                let locked_judges: HashSet<&str> = self
                    .snapshot
                    .judge_locks
                    .iter()
                    .filter(|l| l.locked && l.event_id == event_id && l.category == category)
                    .map(|l| l.judge_name.as_str())
                    .filter(|name| self.judge_usernames.contains(name))
                    .collect();

                !self.judge_usernames.is_empty()
                    && locked_judges.len() == self.judge_usernames.len()
            }
        };

        self.individual.insert((event_id, category), locked);
        locked
    }

    /// Quiz events lock on any record (a single quiz submission is
    /// authoritative); judge-scored group events need every registered
    /// judge locked.
    pub fn group_locked(&mut self, group_event_id: Uuid, scoring: GroupScoring) -> bool {
        if let Some(&cached) = self.group.get(&group_event_id) {
            return cached;
        }

        let locked = match scoring {
            GroupScoring::Quiz => self
                .snapshot
                .group_event_locks
                .iter()
                .any(|l| l.locked && l.group_event_id == group_event_id),
            GroupScoring::Judge => {
                !self.snapshot.judges.is_empty()
                    && self.snapshot.judges.iter().all(|judge| {
                        self.snapshot.group_event_locks.iter().any(|l| {
                            l.locked
                                && l.group_event_id == group_event_id
                                && matches!(&l.locker, GroupLocker::Judge(name) if *name == judge.username)
                        })
                    })
            }
        };

        self.group.insert(group_event_id, locked);
        locked
    }
}
