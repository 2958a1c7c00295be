use storage::{
    Database,
    dto::event::{CreateEventRequest, CreateGroupEventRequest, CreateGroupTeamRequest},
    error::Result,
    models::{AgeCategory, Event, GroupEvent, GroupTeam},
    repository::event::EventRepository,
};
use uuid::Uuid;

/// Create an individual event
pub fn create_event(db: &Database, request: &CreateEventRequest) -> Result<Event> {
    EventRepository::new(db).create_event(request)
}

/// List all individual events
pub fn list_events(db: &Database) -> Vec<Event> {
    EventRepository::new(db).list_events()
}

/// Create a group event
pub fn create_group_event(db: &Database, request: &CreateGroupEventRequest) -> Result<GroupEvent> {
    EventRepository::new(db).create_group_event(request)
}

/// List all group events
pub fn list_group_events(db: &Database) -> Vec<GroupEvent> {
    EventRepository::new(db).list_group_events()
}

/// Enter a team into a group event
pub fn create_group_team(db: &Database, request: &CreateGroupTeamRequest) -> Result<GroupTeam> {
    EventRepository::new(db).create_group_team(request)
}

/// List all group teams
pub fn list_group_teams(db: &Database) -> Vec<GroupTeam> {
    EventRepository::new(db).list_group_teams()
}

/// Publish results for an event+category pair
pub fn declare_individual(db: &Database, event_id: Uuid, category: AgeCategory) -> Result<()> {
    EventRepository::new(db).declare_individual(event_id, category)
}

/// Unpublish results for an event+category pair
pub fn revert_individual(db: &Database, event_id: Uuid, category: AgeCategory) -> Result<()> {
    EventRepository::new(db).revert_individual(event_id, category)
}

/// Publish results for a group event
pub fn declare_group(db: &Database, group_event_id: Uuid) -> Result<()> {
    EventRepository::new(db).declare_group(group_event_id)
}

/// Unpublish results for a group event
pub fn revert_group(db: &Database, group_event_id: Uuid) -> Result<()> {
    EventRepository::new(db).revert_group(group_event_id)
}
