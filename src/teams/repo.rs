use async_trait::async_trait;
use sqlx::PgPool;

use crate::memory::MemoryTable;
use crate::teams::{domain::Team, repo_types::TeamRow};

/// Storage port for teams.
#[async_trait]
pub trait TeamPort: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<Team>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Team>>;
    /// Inserts when `team.id()` is `None`, updates in place otherwise.
    async fn save(&self, team: Team) -> anyhow::Result<Team>;
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
}

pub struct PgTeamRepo {
    db: PgPool,
}

impl PgTeamRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamPort for PgTeamRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, description, created_at
            FROM teams
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, description, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Team::from))
    }

    async fn save(&self, team: Team) -> anyhow::Result<Team> {
        let row = TeamRow::from(team);
        let saved = match row.id {
            None => {
                sqlx::query_as::<_, TeamRow>(
                    r#"
                    INSERT INTO teams (name, description, created_at)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, description, created_at
                    "#,
                )
                .bind(&row.name)
                .bind(&row.description)
                .bind(row.created_at)
                .fetch_one(&self.db)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, TeamRow>(
                    r#"
                    UPDATE teams
                    SET name = $2, description = $3, created_at = $4
                    WHERE id = $1
                    RETURNING id, name, description, created_at
                    "#,
                )
                .bind(id)
                .bind(&row.name)
                .bind(&row.description)
                .bind(row.created_at)
                .fetch_one(&self.db)
                .await?
            }
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTeamRepo {
    table: MemoryTable<TeamRow>,
}

impl InMemoryTeamRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamPort for InMemoryTeamRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Team>> {
        Ok(self.table.all().await.into_iter().map(Team::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Team>> {
        Ok(self.table.get(id).await.map(Team::from))
    }

    async fn save(&self, team: Team) -> anyhow::Result<Team> {
        let saved = self.table.upsert(TeamRow::from(team)).await?;
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        self.table.remove(id).await;
        Ok(())
    }
}
