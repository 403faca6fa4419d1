use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};

use crate::domain::{
    repository::{RepoResult, TodoRepository},
    todo::{CreateTodo, Todo, TodoId, TodoRecord, UpdateTodo},
};

const COLUMNS: &str = r#"id, title, "order", completed, url_prefix"#;

/// Durable repository. Every mutation is a single statement, so the
/// per-id atomicity holds across processes sharing the database file too.
#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> RepoResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = if is_memory_url(database_url) {
            // Each connection to :memory: is a separate database; pin one for the pool's lifetime.
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };
        Ok(Self { pool: Arc::new(pool) })
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> RepoResult<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                "order" INTEGER,
                completed INTEGER,
                url_prefix TEXT NOT NULL
            )"#,
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, input: CreateTodo, url_prefix: &str) -> RepoResult<Todo> {
        let record = TodoRecord::from_create(TodoId::new(), input, url_prefix);
        sqlx::query(r#"INSERT INTO todos (id, title, "order", completed, url_prefix) VALUES (?1, ?2, ?3, ?4, ?5)"#)
            .bind(record.id.to_string())
            .bind(&record.title)
            .bind(record.order)
            .bind(record.completed)
            .bind(&record.url_prefix)
            .execute(&*self.pool)
            .await?;
        Ok(record.to_todo())
    }

    async fn get(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM todos WHERE id = ?1"))
            .bind(id.to_string())
            .fetch_optional(&*self.pool)
            .await?;
        row.map(|r| row_to_record(&r).map(|rec| rec.to_todo())).transpose()
    }

    async fn list(&self) -> RepoResult<Vec<Todo>> {
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM todos ORDER BY rowid"))
            .fetch_all(&*self.pool)
            .await?;
        rows.iter().map(|r| row_to_record(r).map(|rec| rec.to_todo())).collect()
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> RepoResult<Option<Todo>> {
        // One statement: read-modify-write happens under SQLite's write lock.
        let row = sqlx::query(&format!(
            r#"UPDATE todos SET
                title = COALESCE(?2, title),
                "order" = COALESCE(?3, "order"),
                completed = COALESCE(?4, completed)
             WHERE id = ?1
             RETURNING {COLUMNS}"#
        ))
        .bind(id.to_string())
        .bind(input.title.as_ref().map(|t| t.as_str()))
        .bind(input.order)
        .bind(input.completed)
        .fetch_optional(&*self.pool)
        .await?;
        row.map(|r| row_to_record(&r).map(|rec| rec.to_todo())).transpose()
    }

    async fn delete(&self, id: TodoId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> RepoResult<()> {
        sqlx::query("DELETE FROM todos").execute(&*self.pool).await?;
        Ok(())
    }
}

fn row_to_record(row: &SqliteRow) -> RepoResult<TodoRecord> {
    let id_str: String = row.try_get("id")?;
    let id = TodoId::from_str(&id_str).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    Ok(TodoRecord {
        id,
        title: row.try_get("title")?,
        order: row.try_get("order")?,
        completed: row.try_get("completed")?,
        url_prefix: row.try_get("url_prefix")?,
    })
}
