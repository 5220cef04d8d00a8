use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TodoStore};
use crate::model::{validate_title, Todo};

/// Process-local store kept in insertion order. Contents are lost on exit.
#[derive(Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, title: &str, description: Option<&str>) -> Result<Todo, StoreError> {
        validate_title(title).map_err(StoreError::Validation)?;

        let todo = Todo {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.map(str::to_string),
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, StoreError> {
        validate_title(title).map_err(StoreError::Validation)?;

        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        todo.title = title.to_string();
        todo.description = description.map(str::to_string);
        Ok(todo.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        todos.remove(index);
        Ok(())
    }
}
