use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{StoreError, TodoStore};
use crate::model::{validate_title, Todo};

// SQLSTATE for a violated CHECK constraint
const CHECK_VIOLATION: &str = "23514";

#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Connect and bring the `todos` table up to date.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Migration failed: {}", e)))?;

        Ok(Self::new(pool))
    }
}

fn map_write_error(e: sqlx::Error) -> StoreError {
    if let Some(db_error) = e.as_database_error() {
        if db_error.code() == Some(std::borrow::Cow::Borrowed(CHECK_VIOLATION)) {
            return StoreError::Validation("Title is required".to_string());
        }
    }
    e.into()
}

#[async_trait]
impl TodoStore for PgTodoStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, title: &str, description: Option<&str>) -> Result<Todo, StoreError> {
        validate_title(title).map_err(StoreError::Validation)?;

        let rec = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, description
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(rec)
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rec = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description
            FROM todos
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rec)
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, StoreError> {
        validate_title(title).map_err(StoreError::Validation)?;

        let rec = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = $2, description = $3
            WHERE id = $1
            RETURNING id, title, description
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        rec.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
