use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ClientError;
use crate::model::Todo;

/// The four calls a session makes against the todo API.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Todo>, ClientError>;

    async fn create(&self, title: &str, description: Option<&str>) -> Result<Todo, ClientError>;

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, ClientError>;

    async fn delete(&self, id: Uuid) -> Result<(), ClientError>;
}

#[derive(Serialize)]
struct TodoPayload<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// `TodoApi` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

/// Map anything but `expected` to a `ClientError`, keeping the server's
/// `{message}` when the body carries one.
async fn check_status(response: Response, expected: StatusCode) -> Result<Response, ClientError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or(body);

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.http.get(self.collection_url()).send().await?;
        let response = check_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, title: &str, description: Option<&str>) -> Result<Todo, ClientError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(&TodoPayload { title, description })
            .send()
            .await?;
        let response = check_status(response, StatusCode::CREATED).await?;
        Ok(response.json().await?)
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, ClientError> {
        let response = self
            .http
            .put(self.item_url(id))
            .json(&TodoPayload { title, description })
            .send()
            .await?;
        let response = check_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        check_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let api = HttpTodoApi::new("http://localhost:3000/");
        assert_eq!(api.collection_url(), "http://localhost:3000/todos");
        assert_eq!(
            api.item_url(Uuid::nil()),
            "http://localhost:3000/todos/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn payload_omits_missing_description() {
        let body = serde_json::to_value(TodoPayload {
            title: "Buy milk",
            description: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Buy milk" }));
    }
}
