use async_trait::async_trait;
use sqlx::PgPool;

use crate::memory::MemoryTable;
use crate::users::{domain::User, repo_types::UserRow};

/// Storage port for users.
#[async_trait]
pub trait UserPort: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
    /// Inserts when `user.id()` is `None`, updates in place otherwise.
    async fn save(&self, user: User) -> anyhow::Result<User>;
    /// Deleting an unknown id is not an error.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
}

pub struct PgUserRepo {
    db: PgPool,
}

impl PgUserRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserPort for PgUserRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, team_id, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, team_id, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(User::from))
    }

    async fn save(&self, user: User) -> anyhow::Result<User> {
        let row = UserRow::from(user);
        let saved = match row.id {
            None => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (name, email, team_id, created_at)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, email, team_id, created_at
                    "#,
                )
                .bind(&row.name)
                .bind(&row.email)
                .bind(row.team_id)
                .bind(row.created_at)
                .fetch_one(&self.db)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    UPDATE users
                    SET name = $2, email = $3, team_id = $4, created_at = $5
                    WHERE id = $1
                    RETURNING id, name, email, team_id, created_at
                    "#,
                )
                .bind(id)
                .bind(&row.name)
                .bind(&row.email)
                .bind(row.team_id)
                .bind(row.created_at)
                .fetch_one(&self.db)
                .await?
            }
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    table: MemoryTable<UserRow>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserPort for InMemoryUserRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.table.all().await.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        Ok(self.table.get(id).await.map(User::from))
    }

    async fn save(&self, user: User) -> anyhow::Result<User> {
        let saved = self.table.upsert(UserRow::from(user)).await?;
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        self.table.remove(id).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find_by_id_round_trips() {
        let repo = InMemoryUserRepo::new();
        let saved = repo.save(User::new("Ada", "ada@x.com", Some(1))).await.unwrap();
        let found = repo.find_by_id(saved.id().unwrap()).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_a_storage_error() {
        let repo = InMemoryUserRepo::new();
        let ghost = User::rehydrate(Some(42), "x".into(), "x@x".into(), None, crate::timestamp::now_local());
        assert!(repo.save(ghost).await.is_err());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepo::new();
        for name in ["a", "b", "c"] {
            repo.save(User::new(name, format!("{name}@x.com"), None)).await.unwrap();
        }
        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|u| u.name().to_owned())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
