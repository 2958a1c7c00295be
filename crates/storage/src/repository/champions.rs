use crate::db::Database;
use crate::error::{Result, StorageError};
use crate::models::FinalChampions;

pub struct ChampionsRepository<'a> {
    db: &'a Database,
}

impl<'a> ChampionsRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn get(&self) -> Option<FinalChampions> {
        self.db.read().final_champions.clone()
    }

    /// Last-writer-wins; concurrent declarations are not arbitrated here.
    pub fn save(&self, champions: FinalChampions) {
        self.db.write().final_champions = Some(champions);
    }

    pub fn clear(&self) -> Result<()> {
        let mut data = self.db.write();
        if data.final_champions.is_none() {
            return Err(StorageError::PreconditionFailed(
                "No champions are currently declared".to_string(),
            ));
        }
        data.final_champions = None;
        Ok(())
    }
}
