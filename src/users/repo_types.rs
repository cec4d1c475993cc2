use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::memory::Record;
use crate::users::domain::User;

/// Row of the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub team_id: Option<i64>,
    pub created_at: PrimitiveDateTime,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::rehydrate(r.id, r.name, r.email, r.team_id, r.created_at)
    }
}

impl From<User> for UserRow {
    fn from(u: User) -> Self {
        Self {
            id: u.id(),
            name: u.name().to_owned(),
            email: u.email().to_owned(),
            team_id: u.team_id(),
            created_at: u.created_at(),
        }
    }
}

impl Record for UserRow {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
