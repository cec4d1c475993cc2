pub mod domain;
mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use domain::Team;
pub use repo::{InMemoryTeamRepo, PgTeamRepo, TeamPort};
pub use services::{TeamService, TeamUseCase};

pub fn router() -> Router<AppState> {
    handlers::team_routes()
}
