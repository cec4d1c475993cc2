use time::PrimitiveDateTime;

use crate::timestamp::now_local;

/// A team. Immutable once built; `id` is `None` until first saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Option<i64>,
    name: String,
    description: String,
    created_at: PrimitiveDateTime,
}

impl Team {
    /// A team that has not been stored yet.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            created_at: now_local(),
        }
    }

    /// Rebuilds a stored team as-is.
    pub fn rehydrate(
        id: Option<i64>,
        name: String,
        description: String,
        created_at: PrimitiveDateTime,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> PrimitiveDateTime {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_team_has_no_id_and_a_past_timestamp() {
        let team = Team::new("Platform", "Infra team");
        assert_eq!(team.id(), None);
        assert_eq!(team.name(), "Platform");
        assert_eq!(team.description(), "Infra team");
        assert!(team.created_at() <= now_local());
    }
}
