use clap::Parser;
use todos::{
    application::todo_service::TodoServiceImpl,
    config::AppConfig,
    domain::repository::TodoRepository,
    http::routing,
    infrastructure::{memory_repo::InMemoryTodoRepository, sqlite_repo::SqliteTodoRepository},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::parse();
    if config.in_memory {
        tracing::info!("using in-memory repository");
        serve(InMemoryTodoRepository::new(), &config).await
    } else {
        tracing::info!(database_url = %config.database_url, "using sqlite repository");
        serve(SqliteTodoRepository::connect(&config.database_url).await?, &config).await
    }
}

async fn serve<R: TodoRepository + Clone>(repo: R, config: &AppConfig) -> anyhow::Result<()> {
    repo.init().await?;
    let router = routing::app(TodoServiceImpl::new(repo, config.url_prefix()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
