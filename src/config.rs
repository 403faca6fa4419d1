use clap::Parser;

/// Todos API server
#[derive(Parser, Debug, Clone)]
#[command(name = "todos", version)]
pub struct AppConfig {
    /// Interface to bind
    #[arg(short = 'H', long, env = "TODOS_HOSTNAME", default_value = "127.0.0.1")]
    pub hostname: String,

    /// Port to listen on
    #[arg(short, long, env = "TODOS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Keep todos in process memory instead of SQLite
    #[arg(long, env = "TODOS_IN_MEMORY")]
    pub in_memory: bool,

    /// SQLite connection string for the durable store
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://todos.db")]
    pub database_url: String,

    /// Prefix used to build each todo's `url`; defaults to http://{hostname}:{port}/todos/
    #[arg(long, env = "TODOS_URL_PREFIX")]
    pub url_prefix: Option<String>,
}

impl AppConfig {
    /// `host:port`, resolved when the listener binds.
    pub fn bind_addr(&self) -> String { format!("{}:{}", self.hostname, self.port) }

    pub fn url_prefix(&self) -> String {
        match &self.url_prefix {
            Some(prefix) => prefix.clone(),
            None => format!("http://{}:{}/todos/", self.hostname, self.port),
        }
    }
}
