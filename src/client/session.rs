use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use super::TodoApi;
use crate::model::Todo;

/// How long a status message or error stays visible.
pub const FLASH_TTL: Duration = Duration::from_secs(3);

const ADDED: &str = "Item added successfully";
const UPDATED: &str = "Item updated successfully";
const FETCH_FAILED: &str = "Failed to fetch todos";
const CREATE_FAILED: &str = "Unable to create Todo item";
const UPDATE_FAILED: &str = "Unable to update Todo item";
const DELETE_FAILED: &str = "Failed to delete item";

/// What a session operation did to the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The server accepted the change and the local list reflects it.
    Applied,
    /// Preconditions were not met (blank input, unknown row, declined
    /// confirmation); no request was sent.
    Skipped,
    /// The request failed; the local list is untouched and `error()` is set.
    Failed,
}

#[derive(Debug)]
struct Flash {
    text: String,
    set_at: Instant,
}

impl Flash {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            set_at: Instant::now(),
        }
    }

    fn visible(&self) -> Option<&str> {
        (self.set_at.elapsed() < FLASH_TTL).then_some(self.text.as_str())
    }
}

#[derive(Debug)]
struct EditDraft {
    id: Uuid,
    title: String,
    description: String,
}

/// Local mirror of the server's todo list plus the input and edit state of
/// one UI session.
///
/// Every method takes `&mut self`, so a session has at most one request in
/// flight. Two sessions editing the same todo are not coordinated: whichever
/// response lands last on the server wins, and neither session learns about
/// the other's write until it calls `refresh`.
pub struct TodoSession<A> {
    api: A,
    todos: Vec<Todo>,
    title: String,
    description: String,
    edit: Option<EditDraft>,
    message: Option<Flash>,
    error: Option<Flash>,
}

impl<A: TodoApi> TodoSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            todos: Vec::new(),
            title: String::new(),
            description: String::new(),
            edit: None,
            message: None,
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn edit_id(&self) -> Option<Uuid> {
        self.edit.as_ref().map(|e| e.id)
    }

    pub fn edit_title(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.title.as_str())
    }

    pub fn edit_description(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.description.as_str())
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.title = title.into();
        }
    }

    pub fn set_edit_description(&mut self, description: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.description = description.into();
        }
    }

    /// Last success message, if set less than `FLASH_TTL` ago.
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().and_then(Flash::visible)
    }

    /// Last error, if set less than `FLASH_TTL` ago.
    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().and_then(Flash::visible)
    }

    fn succeed(&mut self, text: &str) {
        self.message = Some(Flash::new(text));
    }

    fn fail(&mut self, text: &str, cause: &super::ClientError) -> SyncOutcome {
        tracing::warn!("{}: {}", text, cause);
        self.error = Some(Flash::new(text));
        SyncOutcome::Failed
    }

    /// Replace the local list with the server's.
    pub async fn refresh(&mut self) -> SyncOutcome {
        self.error = None;
        match self.api.list().await {
            Ok(todos) => {
                self.todos = todos;
                SyncOutcome::Applied
            }
            Err(e) => self.fail(FETCH_FAILED, &e),
        }
    }

    /// Create a todo from the input fields. Both must be non-blank.
    ///
    /// The new row uses the record the server returns, including its id.
    pub async fn submit(&mut self) -> SyncOutcome {
        self.error = None;
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return SyncOutcome::Skipped;
        }

        match self.api.create(&self.title, Some(&self.description)).await {
            Ok(todo) => {
                self.todos.push(todo);
                self.title.clear();
                self.description.clear();
                self.succeed(ADDED);
                SyncOutcome::Applied
            }
            Err(e) => self.fail(CREATE_FAILED, &e),
        }
    }

    /// Put a row into edit mode, copying its fields into the edit inputs.
    /// Editing another row discards the previous draft.
    pub fn begin_edit(&mut self, id: Uuid) -> SyncOutcome {
        let Some(todo) = self.todos.iter().find(|t| t.id == id) else {
            return SyncOutcome::Skipped;
        };

        self.edit = Some(EditDraft {
            id,
            title: todo.title.clone(),
            description: todo.description.clone().unwrap_or_default(),
        });
        SyncOutcome::Applied
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Send the edit draft. On failure the session stays in edit mode.
    pub async fn submit_update(&mut self) -> SyncOutcome {
        self.error = None;
        let Some(edit) = self.edit.as_ref() else {
            return SyncOutcome::Skipped;
        };
        if edit.title.trim().is_empty() || edit.description.trim().is_empty() {
            return SyncOutcome::Skipped;
        }

        match self
            .api
            .update(edit.id, &edit.title, Some(&edit.description))
            .await
        {
            Ok(updated) => {
                if let Some(row) = self.todos.iter_mut().find(|t| t.id == updated.id) {
                    *row = updated;
                }
                self.edit = None;
                self.succeed(UPDATED);
                SyncOutcome::Applied
            }
            Err(e) => self.fail(UPDATE_FAILED, &e),
        }
    }

    /// Delete a row once `confirm` agrees. A declined confirmation sends
    /// nothing, and neither does a delete while a row is being edited.
    pub async fn delete(&mut self, id: Uuid, confirm: impl FnOnce(&Todo) -> bool) -> SyncOutcome {
        if self.edit.is_some() {
            return SyncOutcome::Skipped;
        }
        let Some(todo) = self.todos.iter().find(|t| t.id == id) else {
            return SyncOutcome::Skipped;
        };
        if !confirm(todo) {
            return SyncOutcome::Skipped;
        }

        self.error = None;
        match self.api.delete(id).await {
            Ok(()) => {
                self.todos.retain(|t| t.id != id);
                SyncOutcome::Applied
            }
            Err(e) => self.fail(DELETE_FAILED, &e),
        }
    }
}
