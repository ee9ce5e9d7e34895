//! HTTP client for the flashcard API.
//!
//! Each call returns the decoded body on 2xx. Anything else becomes
//! [`ClientError::Api`] carrying the server's `message` when the body has one,
//! or a per-operation fallback when it does not.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::model::{Confirmation, Flashcard, FlashcardDraft, FlashcardId, FlashcardPatch};
use crate::server::error::ErrorBody;
use crate::server::routes::{ADD_FAILED, DELETE_FAILED, GET_FAILED, LIST_FAILED, UPDATE_FAILED};
use crate::server::API_PREFIX;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct FlashcardClient {
    http: Client,
    base_url: String,
}

impl FlashcardClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: impl Into<String>) -> Self {
        let base = server_url.into();
        Self {
            http,
            base_url: format!("{}{}", base.trim_end_matches('/'), API_PREFIX),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn card_url(&self, id: &FlashcardId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub async fn create(&self, draft: &FlashcardDraft) -> ClientResult<Flashcard> {
        let response = self.http.post(&self.base_url).json(draft).send().await?;
        decode(response, ADD_FAILED).await
    }

    pub async fn list(&self) -> ClientResult<Vec<Flashcard>> {
        let response = self.http.get(&self.base_url).send().await?;
        decode(response, LIST_FAILED).await
    }

    pub async fn get(&self, id: &FlashcardId) -> ClientResult<Flashcard> {
        let response = self.http.get(self.card_url(id)).send().await?;
        decode(response, GET_FAILED).await
    }

    pub async fn update(&self, id: &FlashcardId, patch: &FlashcardPatch) -> ClientResult<Flashcard> {
        let response = self.http.patch(self.card_url(id)).json(patch).send().await?;
        decode(response, UPDATE_FAILED).await
    }

    pub async fn delete(&self, id: &FlashcardId) -> ClientResult<String> {
        let response = self.http.delete(self.card_url(id)).send().await?;
        let confirmation: Confirmation = decode(response, DELETE_FAILED).await?;
        Ok(confirmation.message)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), %body, "API call failed");
    Err(api_error(status.as_u16(), &body, fallback))
}

fn api_error(status: u16, body: &str, fallback: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    ClientError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_server_message_when_present() {
        let err = api_error(404, r#"{"message":"Flashcard not found"}"#, GET_FAILED);
        assert_eq!(err.to_string(), "Flashcard not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn falls_back_when_body_is_not_json() {
        let err = api_error(502, "<html>Bad Gateway</html>", ADD_FAILED);
        assert_eq!(err.to_string(), "Failed to add flashcard");
    }

    #[test]
    fn builds_urls_under_api_prefix() {
        let client = FlashcardClient::new("http://localhost:5050/");
        assert_eq!(client.base_url(), "http://localhost:5050/api/flashcards");
        let id: FlashcardId = "000000000000000000000000".parse().unwrap();
        assert_eq!(
            client.card_url(&id),
            "http://localhost:5050/api/flashcards/000000000000000000000000"
        );
    }
}
