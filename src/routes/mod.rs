use axum::{
    routing::{get, post},
    Router,
};
use platefinder_store::SqliteRecipeStore;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

mod health;
mod recipes;
mod search;

pub use health::{health, ready};
pub use recipes::{create_recipe, get_recipe, list_recipes};
pub use search::{search_recipes, SearchRequest};

#[derive(Clone)]
pub struct AppState {
    pub store: SqliteRecipeStore,
    pub pool: SqlitePool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Probes (no state beyond the pool)
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state.pool.clone())
        .merge(
            Router::new()
                .route("/api/recipes/search", post(search_recipes))
                .route("/api/recipes", get(list_recipes).post(create_recipe))
                .route("/api/recipes/{id}", get(get_recipe))
                .layer(TraceLayer::new_for_http())
                .with_state(state),
        )
}
