use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::teams::domain::Team;

/// Body of `POST /teams`.
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    #[serde(with = "crate::timestamp::iso_local")]
    pub created_at: PrimitiveDateTime,
}

impl From<Team> for TeamResponse {
    fn from(t: Team) -> Self {
        Self {
            id: t.id(),
            name: t.name().to_owned(),
            description: t.description().to_owned(),
            created_at: t.created_at(),
        }
    }
}
