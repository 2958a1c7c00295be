use storage::{Database, error::Result, models::FinalChampions, services::champions};

/// Current declaration state
pub fn current(db: &Database) -> Option<FinalChampions> {
    champions::current(db)
}

/// Declare the top three sections as final champions
pub fn declare(db: &Database, declared_by: &str) -> Result<FinalChampions> {
    champions::declare(db, declared_by)
}

/// Revert the declaration
pub fn revert(db: &Database) -> Result<()> {
    champions::revert(db)
}
