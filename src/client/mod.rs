//! Client side of the todo API.
//!
//! `TodoApi` is the transport seam; `HttpTodoApi` speaks to a running
//! server. `TodoSession` is the view model a UI drives: it keeps a local
//! mirror of the list and only changes it after the server agrees.

mod api;
mod error;
mod session;

pub use api::{HttpTodoApi, TodoApi};
pub use error::ClientError;
pub use session::{SyncOutcome, TodoSession, FLASH_TTL};
