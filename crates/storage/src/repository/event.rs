use uuid::Uuid;

use crate::db::Database;
use crate::dto::event::{CreateEventRequest, CreateGroupEventRequest, CreateGroupTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::{AgeCategory, DeclaredResult, Event, GroupEvent, GroupTeam};

pub struct EventRepository<'a> {
    db: &'a Database,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn create_event(&self, req: &CreateEventRequest) -> Result<Event> {
        let mut data = self.db.write();

        if data.events.iter().any(|e| e.name == req.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "Event '{}' already exists",
                req.name
            )));
        }

        let event = Event {
            event_id: Uuid::new_v4(),
            name: req.name.clone(),
            scoring: req.scoring,
        };
        data.events.push(event.clone());

        Ok(event)
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.db.read().events.clone()
    }

    pub fn find_event(&self, event_id: Uuid) -> Result<Event> {
        self.db
            .read()
            .events
            .iter()
            .find(|e| e.event_id == event_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    pub fn create_group_event(&self, req: &CreateGroupEventRequest) -> Result<GroupEvent> {
        let mut data = self.db.write();

        if data.group_events.iter().any(|g| g.name == req.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "Group event '{}' already exists",
                req.name
            )));
        }

        let group_event = GroupEvent {
            group_event_id: Uuid::new_v4(),
            name: req.name.clone(),
            scoring: req.scoring,
        };
        data.group_events.push(group_event.clone());

        Ok(group_event)
    }

    pub fn list_group_events(&self) -> Vec<GroupEvent> {
        self.db.read().group_events.clone()
    }

    pub fn create_group_team(&self, req: &CreateGroupTeamRequest) -> Result<GroupTeam> {
        let mut data = self.db.write();

        if !data
            .group_events
            .iter()
            .any(|g| g.group_event_id == req.group_event_id)
        {
            return Err(StorageError::ConstraintViolation(
                "Unknown group event".to_string(),
            ));
        }
        if !data.sections.iter().any(|s| s.section_id == req.section_id) {
            return Err(StorageError::ConstraintViolation(
                "Unknown section".to_string(),
            ));
        }
        if data
            .group_teams
            .iter()
            .any(|t| t.group_event_id == req.group_event_id && t.name == req.name)
        {
            return Err(StorageError::ConstraintViolation(format!(
                "Team '{}' already entered in this event",
                req.name
            )));
        }

        let team = GroupTeam {
            team_id: Uuid::new_v4(),
            group_event_id: req.group_event_id,
            section_id: req.section_id,
            name: req.name.clone(),
            members: req.members.clone(),
            scores: Vec::new(),
        };
        data.group_teams.push(team.clone());

        Ok(team)
    }

    pub fn list_group_teams(&self) -> Vec<GroupTeam> {
        self.db.read().group_teams.clone()
    }

    /// Publishes results for an event+category pair. Idempotent.
    pub fn declare_individual(&self, event_id: Uuid, category: AgeCategory) -> Result<()> {
        let mut data = self.db.write();

        if !data.events.iter().any(|e| e.event_id == event_id) {
            return Err(StorageError::NotFound);
        }

        let declared = DeclaredResult::Individual { event_id, category };
        if !data.declared_results.contains(&declared) {
            data.declared_results.push(declared);
        }

        Ok(())
    }

    pub fn revert_individual(&self, event_id: Uuid, category: AgeCategory) -> Result<()> {
        let mut data = self.db.write();
        let declared = DeclaredResult::Individual { event_id, category };

        let before = data.declared_results.len();
        data.declared_results.retain(|d| *d != declared);
        if data.declared_results.len() == before {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Publishes results for a group event. Idempotent.
    pub fn declare_group(&self, group_event_id: Uuid) -> Result<()> {
        let mut data = self.db.write();

        if !data
            .group_events
            .iter()
            .any(|g| g.group_event_id == group_event_id)
        {
            return Err(StorageError::NotFound);
        }

        let declared = DeclaredResult::Group { group_event_id };
        if !data.declared_results.contains(&declared) {
            data.declared_results.push(declared);
        }

        Ok(())
    }

    pub fn revert_group(&self, group_event_id: Uuid) -> Result<()> {
        let mut data = self.db.write();
        let declared = DeclaredResult::Group { group_event_id };

        let before = data.declared_results.len();
        data.declared_results.retain(|d| *d != declared);
        if data.declared_results.len() == before {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
