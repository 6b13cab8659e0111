mod config;
mod repos;
mod system;

pub use config::{
    Config, ConfigError, RunMode, CLOUDINARY_PRESET_PLACEHOLDER, CLOUDINARY_URL_PLACEHOLDER,
};
pub use repos::{
    IAdminRepo, IDashboardRepo, IRosterRepo, InMemoryAdminRepo, InMemoryDashboardRepo,
    InMemoryRosterRepo, Repos,
};
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};

#[derive(Clone)]
pub struct CampusContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl CampusContext {
    /// Context backed by in-memory repositories. Used by tests and local demos.
    pub fn create_inmemory(config: Config) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the config.
///
/// Fails when MongoDB cannot be reached.
pub async fn setup_context(config: Config) -> anyhow::Result<CampusContext> {
    let repos = Repos::create_mongodb(&config.mongo_uri, config.mongo_db_name.as_deref()).await?;
    Ok(CampusContext {
        repos,
        config,
        sys: Arc::new(RealSys {}),
    })
}
