use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::ServiceError;
use crate::users::{domain::User, repo::UserPort};

/// User operations offered to the HTTP and batch adapters.
#[async_trait]
pub trait UserUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ServiceError>;
    async fn create(
        &self,
        name: String,
        email: String,
        team_id: Option<i64>,
    ) -> Result<User, ServiceError>;
    /// Replaces name, email and team of an existing user.
    async fn update(
        &self,
        id: i64,
        name: String,
        email: String,
        team_id: Option<i64>,
    ) -> Result<User, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

pub struct UserService {
    port: Arc<dyn UserPort>,
}

impl UserService {
    pub fn new(port: Arc<dyn UserPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl UserUseCase for UserService {
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.port.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        name: String,
        email: String,
        team_id: Option<i64>,
    ) -> Result<User, ServiceError> {
        let user = self.port.save(User::new(name, email, team_id)).await?;
        debug!(user_id = ?user.id(), "user created");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: i64,
        name: String,
        email: String,
        team_id: Option<i64>,
    ) -> Result<User, ServiceError> {
        let existing = self
            .port
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { entity: "user", id })?;
        let user = self
            .port
            .save(existing.with_changes(name, email, team_id))
            .await?;
        debug!(user_id = id, "user updated");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.port.delete_by_id(id).await?;
        debug!(user_id = id, "user deleted");
        Ok(())
    }
}
