use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::memory::Record;
use crate::teams::domain::Team;

/// Row of the `teams` table.
#[derive(Debug, Clone, FromRow)]
pub struct TeamRow {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub created_at: PrimitiveDateTime,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::rehydrate(r.id, r.name, r.description, r.created_at)
    }
}

impl From<Team> for TeamRow {
    fn from(t: Team) -> Self {
        Self {
            id: t.id(),
            name: t.name().to_owned(),
            description: t.description().to_owned(),
            created_at: t.created_at(),
        }
    }
}

impl Record for TeamRow {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
