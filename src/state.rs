use std::sync::Arc;

use sqlx::PgPool;

use crate::teams::{InMemoryTeamRepo, PgTeamRepo, TeamService, TeamUseCase};
use crate::users::{InMemoryUserRepo, PgUserRepo, UserService, UserUseCase};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserUseCase>,
    pub teams: Arc<dyn TeamUseCase>,
}

impl AppState {
    /// Services backed by PostgreSQL.
    pub fn from_pool(db: PgPool) -> Self {
        let users = Arc::new(UserService::new(Arc::new(PgUserRepo::new(db.clone()))));
        let teams = Arc::new(TeamService::new(Arc::new(PgTeamRepo::new(db))));
        Self::from_parts(users, teams)
    }

    pub fn from_parts(users: Arc<dyn UserUseCase>, teams: Arc<dyn TeamUseCase>) -> Self {
        Self { users, teams }
    }

    /// Services backed by in-memory tables; nothing is persisted.
    pub fn fake() -> Self {
        let users = Arc::new(UserService::new(Arc::new(InMemoryUserRepo::new())));
        let teams = Arc::new(TeamService::new(Arc::new(InMemoryTeamRepo::new())));
        Self::from_parts(users, teams)
    }
}
