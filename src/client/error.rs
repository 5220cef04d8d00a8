/// Errors returned by `TodoApi` calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered 404: the todo does not exist.
    #[error("Todo not found")]
    NotFound,

    /// Any other unexpected status, with the server's message when it sent one.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
