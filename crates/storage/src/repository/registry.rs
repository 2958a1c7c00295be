use uuid::Uuid;

use crate::db::Database;
use crate::dto::registry::{CreateJudgeRequest, CreateSectionRequest};
use crate::error::{Result, StorageError};
use crate::models::{Judge, PointsConfig, Section};

pub struct RegistryRepository<'a> {
    db: &'a Database,
}

impl<'a> RegistryRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn create_section(&self, req: &CreateSectionRequest) -> Result<Section> {
        let mut data = self.db.write();

        if data.sections.iter().any(|s| s.name == req.name) {
            return Err(StorageError::ConstraintViolation(format!(
                "Section '{}' already exists",
                req.name
            )));
        }

        let section = Section {
            section_id: Uuid::new_v4(),
            name: req.name.clone(),
        };
        data.sections.push(section.clone());

        Ok(section)
    }

    pub fn list_sections(&self) -> Vec<Section> {
        self.db.read().sections.clone()
    }

    pub fn create_judge(&self, req: &CreateJudgeRequest) -> Result<Judge> {
        let mut data = self.db.write();

        if data.judges.iter().any(|j| j.username == req.username) {
            return Err(StorageError::ConstraintViolation(format!(
                "Judge '{}' already exists",
                req.username
            )));
        }

        let judge = Judge {
            judge_id: Uuid::new_v4(),
            username: req.username.clone(),
            display_name: req.display_name.clone(),
        };
        data.judges.push(judge.clone());

        Ok(judge)
    }

    pub fn list_judges(&self) -> Vec<Judge> {
        self.db.read().judges.clone()
    }

    pub fn points_config(&self) -> PointsConfig {
        self.db.read().points_config
    }

    pub fn set_points_config(&self, config: PointsConfig) -> PointsConfig {
        let mut data = self.db.write();
        data.points_config = config;
        config
    }
}
