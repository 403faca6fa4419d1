use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TodoId(pub Uuid);

impl TodoId {
    pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.0.hyphenated(), f) }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Uuid::parse_str(s).map(Self) }
}

/// A todo as handed to callers. Always an owned copy of the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { id, title: title.into(), order: None, url: url.into(), completed: None }
    }
}

/// Title that is guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct TodoTitle(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("title must not be empty")]
pub struct EmptyTitle;

impl TodoTitle {
    pub fn parse(value: impl Into<String>) -> Result<Self, EmptyTitle> {
        let value = value.into();
        if value.trim().is_empty() { return Err(EmptyTitle); }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn into_inner(self) -> String { self.0 }
}

impl TryFrom<String> for TodoTitle {
    type Error = EmptyTitle;

    fn try_from(value: String) -> Result<Self, Self::Error> { Self::parse(value) }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: TodoTitle,
    #[serde(default)]
    pub order: Option<i64>,
}

/// Partial update. `None` means "leave as is", never "clear".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<TodoTitle>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.order.is_none() && self.completed.is_none()
    }
}

/// What a repository actually keeps. The url is not stored, only the prefix
/// it is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    pub order: Option<i64>,
    pub completed: Option<bool>,
    pub url_prefix: String,
}

impl TodoRecord {
    pub fn from_create(id: TodoId, input: CreateTodo, url_prefix: &str) -> Self {
        Self {
            id,
            title: input.title.into_inner(),
            order: input.order,
            completed: None,
            url_prefix: url_prefix.to_owned(),
        }
    }

    pub fn apply(&mut self, input: &UpdateTodo) {
        if let Some(t) = &input.title { self.title = t.as_str().to_owned(); }
        if let Some(o) = input.order { self.order = Some(o); }
        if let Some(c) = input.completed { self.completed = Some(c); }
    }

    pub fn url(&self) -> String { format!("{}{}", self.url_prefix, self.id) }

    pub fn to_todo(&self) -> Todo {
        Todo {
            id: self.id,
            title: self.title.clone(),
            order: self.order,
            url: self.url(),
            completed: self.completed,
        }
    }
}
