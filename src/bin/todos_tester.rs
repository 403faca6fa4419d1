use clap::Parser;
use todos::client::TodosClient;
use tracing_subscriber::EnvFilter;

/// Creates one todo on a running server and reads it back.
#[derive(Parser, Debug)]
#[command(name = "todos-tester", version)]
struct Args {
    /// Server root, without the /todos path
    #[arg(long, env = "TODOS_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[arg(long, default_value = "Smoke test")]
    title: String,

    #[arg(long, default_value_t = 1)]
    order: i64,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let args = Args::parse();
    let client = TodosClient::new(&args.base_url);

    let created = client.create(&args.title, Some(args.order))?;
    tracing::debug!(?created, "created");

    match client.get(created.id)? {
        Some(fetched) if fetched == created => tracing::info!(id = %created.id, "round trip ok"),
        Some(fetched) => anyhow::bail!("server returned a different todo: {fetched:?}"),
        None => anyhow::bail!("todo {} missing right after create", created.id),
    }
    Ok(())
}
