use crate::domain::repository::{RepoResult, TodoRepository};
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> RepoResult<Todo>;
    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    async fn list(&self) -> RepoResult<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>>;
    async fn delete(&self, id: TodoId) -> RepoResult<bool>;
    async fn delete_all(&self) -> RepoResult<()>;
}

/// Forwards to the repository, supplying the url prefix todos are addressed under.
#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
    url_prefix: String,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R, url_prefix: impl Into<String>) -> Self {
        Self { repo, url_prefix: url_prefix.into() }
    }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> RepoResult<Todo> {
        let todo = self.repo.create(input, &self.url_prefix).await?;
        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>> { self.repo.get(id).await }

    async fn list(&self) -> RepoResult<Vec<Todo>> { self.repo.list().await }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>> {
        let noop = input.is_empty();
        let updated = self.repo.update(id, input).await?;
        tracing::debug!(%id, found = updated.is_some(), noop, "todo updated");
        Ok(updated)
    }

    async fn delete(&self, id: TodoId) -> RepoResult<bool> {
        let deleted = self.repo.delete(id).await?;
        tracing::debug!(%id, deleted, "todo deleted");
        Ok(deleted)
    }

    async fn delete_all(&self) -> RepoResult<()> {
        self.repo.delete_all().await?;
        tracing::debug!("all todos deleted");
        Ok(())
    }
}
