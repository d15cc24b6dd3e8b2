use anyhow::Result;
use clap::{Parser, Subcommand};
use platefinder::routes::{router, AppState};
use platefinder_store::SqliteRecipeStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// platefinder - cook with what you have
#[derive(Parser)]
#[command(name = "platefinder")]
#[command(about = "Recipe discovery by pantry contents", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop the database and recreate it with migrations
    Reset,
    /// Load the built-in recipe fixtures
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = platefinder::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    platefinder::observability::init_observability(
        "platefinder",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Migrate => platefinder::migrate::migrate(&config).await,
        Commands::Reset => platefinder::migrate::reset(&config).await,
        Commands::Seed => seed_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: platefinder::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("starting platefinder server");

    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    let options = SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(options)
        .await?;

    let store = SqliteRecipeStore::new(pool.clone());
    store.migrate().await?;

    let app = router(AppState { store, pool });

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn seed_command(config: platefinder::Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(options)
        .await?;

    let store = SqliteRecipeStore::new(pool);
    store.migrate().await?;
    let inserted = platefinder::seed::seed(&store).await?;
    tracing::info!(inserted, "seed complete");
    Ok(())
}
