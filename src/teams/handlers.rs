use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    error::ServiceError,
    state::AppState,
    teams::dto::{CreateTeamRequest, TeamResponse},
};

pub fn team_routes() -> Router<AppState> {
    Router::new().route("/teams", get(list_teams).post(create_team))
}

#[instrument(skip(state))]
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ServiceError> {
    let teams = state.teams.list().await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ServiceError> {
    let team = state
        .teams
        .create(payload.name, payload.description)
        .await?;
    info!(team_id = ?team.id(), name = %team.name(), "team created");
    Ok((StatusCode::CREATED, Json(team.into())))
}
