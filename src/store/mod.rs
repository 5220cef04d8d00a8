//! Persistence backends for todos.
//!
//! Handlers only ever see `dyn TodoStore`; the concrete backend is picked
//! once at startup from configuration.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgTodoStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::Todo;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record would break the title invariant.
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    /// The backend could not be reached or rejected the query.
    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Create/list/update/delete over a single todo collection.
///
/// Every call is atomic for the one record it touches. No cross-record
/// transactions are offered.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Short backend name, reported by the health endpoint.
    fn backend(&self) -> &'static str;

    async fn create(&self, title: &str, description: Option<&str>) -> Result<Todo, StoreError>;

    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Overwrites both fields. A `None` description clears it.
    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
