use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{
    DeclaredResult, Event, FinalChampions, GroupEvent, GroupEventLock, GroupTeam, Judge,
    JudgeLock, Participant, PointsConfig, Score, Section,
};
use crate::snapshot::Snapshot;

/// In-memory competition store. Cloning shares the underlying data, so one
/// handle can be injected across the web layer while every test constructs
/// its own isolated instance.
#[derive(Clone, Default)]
pub struct Database {
    inner: Arc<RwLock<Collections>>,
}

#[derive(Default)]
pub(crate) struct Collections {
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
    pub final_champions: Option<FinalChampions>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Collections> {
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Clones every collection in one read so an aggregation pass never
    /// observes a partial update.
    pub fn snapshot(&self) -> Snapshot {
        let data = self.read();
        Snapshot {
            sections: data.sections.clone(),
            judges: data.judges.clone(),
            events: data.events.clone(),
            group_events: data.group_events.clone(),
            participants: data.participants.clone(),
            scores: data.scores.clone(),
            group_teams: data.group_teams.clone(),
            judge_locks: data.judge_locks.clone(),
            group_event_locks: data.group_event_locks.clone(),
            declared_results: data.declared_results.clone(),
            points_config: data.points_config,
        }
    }
}
