//! Built-in recipe fixtures for local development and demos.
//!
//! The fixture file intentionally mixes the field-name variants seen
//! across service versions (`name` vs `title`, `tags` vs `dietaryTags`,
//! bare-string vs detailed ingredients) so seeding also exercises the
//! store's document adapter.

use platefinder_store::{RecipeDocument, RecipeStore, SqliteRecipeStore};
use uuid::Uuid;

const SEED_RECIPES: &str = include_str!("../data/seed_recipes.json");

/// Parse the embedded fixture set into canonical recipes.
pub fn seed_recipes() -> anyhow::Result<Vec<platefinder_matching::Recipe>> {
    let documents: Vec<RecipeDocument> = serde_json::from_str(SEED_RECIPES)?;
    Ok(documents
        .into_iter()
        .map(|doc| doc.into_recipe(Uuid::new_v4().to_string()))
        .collect())
}

/// Insert the fixture set. Recipes with ids already present are skipped.
pub async fn seed(store: &SqliteRecipeStore) -> anyhow::Result<usize> {
    let mut inserted = 0;
    for recipe in seed_recipes()? {
        if store.fetch_by_id(&recipe.id).await?.is_some() {
            continue;
        }
        store.insert(&recipe).await?;
        inserted += 1;
    }
    tracing::info!(inserted, "seeded recipe fixtures");
    Ok(inserted)
}
