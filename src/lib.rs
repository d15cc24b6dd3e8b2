pub mod config;
pub mod error;
pub mod migrate;
pub mod observability;
pub mod routes;
pub mod seed;

pub use config::Config;
pub use routes::AppState;

/// Create the app router against an existing pool.
///
/// Runs the (idempotent) schema migration, so integration tests can point
/// this at `sqlite::memory:` and go.
pub async fn create_app(pool: sqlx::SqlitePool) -> anyhow::Result<axum::Router> {
    let store = platefinder_store::SqliteRecipeStore::new(pool.clone());
    store.migrate().await?;

    let state = AppState { store, pool };
    Ok(routes::router(state))
}
