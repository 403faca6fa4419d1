//! Blocking client for a running todos server, used by the `todos-tester`
//! smoke binary.
//!
//! Non-2xx statuses come back as data rather than transport errors, so the
//! server's own status mapping (204 for a missing todo) stays visible.

use serde::Serialize;

use crate::domain::todo::{Todo, TodoId};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct CreateBody<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<i64>,
}

pub struct TodosClient {
    base_url: String,
    agent: ureq::Agent,
}

impl TodosClient {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { base_url: base_url.trim_end_matches('/').to_string(), agent }
    }

    pub fn create(&self, title: &str, order: Option<i64>) -> Result<Todo, ClientError> {
        let body = serde_json::to_string(&CreateBody { title, order })?;
        let mut response = self.agent
            .post(&format!("{}/todos", self.base_url))
            .content_type("application/json")
            .send(body.as_bytes())?;
        let status = response.status().as_u16();
        let text = response.body_mut().read_to_string()?;
        if status != 200 {
            return Err(ClientError::Status { status, body: text });
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// `None` when the server answers 204.
    pub fn get(&self, id: TodoId) -> Result<Option<Todo>, ClientError> {
        let mut response = self.agent.get(&format!("{}/todos/{id}", self.base_url)).call()?;
        let status = response.status().as_u16();
        let text = response.body_mut().read_to_string()?;
        match status {
            200 => Ok(Some(serde_json::from_str(&text)?)),
            204 => Ok(None),
            _ => Err(ClientError::Status { status, body: text }),
        }
    }
}
