use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::ServiceError;
use crate::teams::{domain::Team, repo::TeamPort};

/// Team operations offered to the HTTP and batch adapters.
#[async_trait]
pub trait TeamUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Team>, ServiceError>;
    async fn create(&self, name: String, description: String) -> Result<Team, ServiceError>;
}

pub struct TeamService {
    port: Arc<dyn TeamPort>,
}

impl TeamService {
    pub fn new(port: Arc<dyn TeamPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl TeamUseCase for TeamService {
    async fn list(&self) -> Result<Vec<Team>, ServiceError> {
        Ok(self.port.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn create(&self, name: String, description: String) -> Result<Team, ServiceError> {
        let team = self.port.save(Team::new(name, description)).await?;
        debug!(team_id = ?team.id(), "team created");
        Ok(team)
    }
}
