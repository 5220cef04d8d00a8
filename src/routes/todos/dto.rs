use serde::Deserialize;

// Missing fields deserialize to defaults so validation, not serde, decides
// what a bad title looks like.

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}
