use time::PrimitiveDateTime;

use crate::timestamp::now_local;

/// A user, optionally belonging to a team. `team_id` is not checked
/// against existing teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<i64>,
    name: String,
    email: String,
    team_id: Option<i64>,
    created_at: PrimitiveDateTime,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, team_id: Option<i64>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            team_id,
            created_at: now_local(),
        }
    }

    pub fn rehydrate(
        id: Option<i64>,
        name: String,
        email: String,
        team_id: Option<i64>,
        created_at: PrimitiveDateTime,
    ) -> Self {
        Self {
            id,
            name,
            email,
            team_id,
            created_at,
        }
    }

    /// Replacement for an update: every mutable field is overwritten,
    /// identity and creation time are carried over.
    pub fn with_changes(self, name: String, email: String, team_id: Option<i64>) -> Self {
        Self {
            name,
            email,
            team_id,
            ..self
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn team_id(&self) -> Option<i64> {
        self.team_id
    }

    pub fn created_at(&self) -> PrimitiveDateTime {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn with_changes_keeps_identity_and_creation_time() {
        let created = datetime!(2024-01-02 03:04:05.000006);
        let user = User::rehydrate(Some(4), "Ada".into(), "ada@x.com".into(), Some(1), created);

        let changed = user.with_changes("Ada L.".into(), "ada2@x.com".into(), None);
        assert_eq!(changed.id(), Some(4));
        assert_eq!(changed.created_at(), created);
        assert_eq!(changed.name(), "Ada L.");
        assert_eq!(changed.email(), "ada2@x.com");
        assert_eq!(changed.team_id(), None);
    }
}
