pub mod domain;
mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use domain::User;
pub use repo::{InMemoryUserRepo, PgUserRepo, UserPort};
pub use services::{UserService, UserUseCase};

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
