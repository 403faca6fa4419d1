use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    repository::{RepoResult, TodoRepository},
    todo::{CreateTodo, Todo, TodoId, TodoRecord, UpdateTodo},
};

struct Slot {
    seq: u64,
    record: TodoRecord,
}

#[derive(Default)]
struct State {
    items: HashMap<TodoId, Slot>,
    next_seq: u64,
}

/// Process-local repository. All writers go through one `RwLock`, so every
/// operation is atomic with respect to every other. Clones share the store.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn init(&self) -> RepoResult<()> { Ok(()) }

    async fn create(&self, input: CreateTodo, url_prefix: &str) -> RepoResult<Todo> {
        let mut state = self.state.write().await;
        let mut id = TodoId::new();
        while state.items.contains_key(&id) { id = TodoId::new(); }
        let record = TodoRecord::from_create(id, input, url_prefix);
        let todo = record.to_todo();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.items.insert(id, Slot { seq, record });
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        Ok(self.state.read().await.items.get(&id).map(|slot| slot.record.to_todo()))
    }

    async fn list(&self) -> RepoResult<Vec<Todo>> {
        let state = self.state.read().await;
        let mut slots: Vec<&Slot> = state.items.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        Ok(slots.into_iter().map(|slot| slot.record.to_todo()).collect())
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>> {
        let mut state = self.state.write().await;
        let Some(slot) = state.items.get_mut(&id) else { return Ok(None) };
        slot.record.apply(&input);
        Ok(Some(slot.record.to_todo()))
    }

    async fn delete(&self, id: TodoId) -> RepoResult<bool> {
        Ok(self.state.write().await.items.remove(&id).is_some())
    }

    async fn delete_all(&self) -> RepoResult<()> {
        self.state.write().await.items.clear();
        Ok(())
    }
}
