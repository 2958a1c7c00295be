use storage::{
    Database,
    dto::registry::{CreateJudgeRequest, CreateSectionRequest},
    error::Result,
    models::{Judge, PointsConfig, Section},
    repository::registry::RegistryRepository,
};

/// Register a section
pub fn create_section(db: &Database, request: &CreateSectionRequest) -> Result<Section> {
    RegistryRepository::new(db).create_section(request)
}

/// List all sections
pub fn list_sections(db: &Database) -> Vec<Section> {
    RegistryRepository::new(db).list_sections()
}

/// Register a judge
pub fn create_judge(db: &Database, request: &CreateJudgeRequest) -> Result<Judge> {
    RegistryRepository::new(db).create_judge(request)
}

/// List all judges
pub fn list_judges(db: &Database) -> Vec<Judge> {
    RegistryRepository::new(db).list_judges()
}

/// Get the points configuration
pub fn points_config(db: &Database) -> PointsConfig {
    RegistryRepository::new(db).points_config()
}

/// Replace the points configuration
pub fn set_points_config(db: &Database, config: PointsConfig) -> PointsConfig {
    RegistryRepository::new(db).set_points_config(config)
}
