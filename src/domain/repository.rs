use async_trait::async_trait;
use super::todo::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Faults raised by the backing store. "Not found" is never one of these:
/// it comes back as `None` / `false`.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Storage for todos. Implementations own their locking; every method may be
/// called concurrently and may suspend.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn init(&self) -> RepoResult<()>;
    async fn create(&self, input: CreateTodo, url_prefix: &str) -> RepoResult<Todo>;
    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    /// Snapshot of all todos at call time.
    async fn list(&self) -> RepoResult<Vec<Todo>>;
    /// Applies only the supplied fields, atomically per id.
    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>>;
    /// `false` when there was nothing to delete.
    async fn delete(&self, id: TodoId) -> RepoResult<bool>;
    async fn delete_all(&self) -> RepoResult<()>;
}
