//! SQLite-backed recipe store.

use crate::document::{IngredientDocument, InstructionDocument};
use crate::error::StoreError;
use crate::{FilterHints, RecipeStore};
use async_trait::async_trait;
use platefinder_matching::{Ingredient, InstructionStep, Recipe};
use serde::de::DeserializeOwned;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

#[derive(Debug, Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
}

impl SqliteRecipeStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteRecipeStore { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the recipes table. Idempotent.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                image TEXT,
                cooking_time_min INTEGER NOT NULL,
                difficulty TEXT,
                dietary_tags TEXT NOT NULL DEFAULT '[]',
                ingredients TEXT NOT NULL DEFAULT '[]',
                instructions TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn fetch_candidates(
        &self,
        hints: Option<&FilterHints>,
    ) -> Result<Vec<Recipe>, StoreError> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, title, image, cooking_time_min, difficulty, \
             dietary_tags, ingredients, instructions FROM recipes",
        );

        // Coarse LIKE pre-filter on the tags JSON; the matcher applies
        // the exact AND gate afterwards, so over-matching here is safe.
        if let Some(hints) = hints.filter(|h| !h.dietary_tags.is_empty()) {
            query.push(" WHERE 1 = 1");
            for tag in &hints.dietary_tags {
                query.push(" AND dietary_tags LIKE ");
                query.push_bind(format!("%{}%", tag));
            }
        }
        query.push(" ORDER BY created_at ASC, id ASC");

        let rows = query.build().fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_recipe).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let row = sqlx::query(
            "SELECT id, title, image, cooking_time_min, difficulty, \
             dietary_tags, ingredients, instructions FROM recipes WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_recipe))
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), StoreError> {
        let dietary_tags = serde_json::to_string(&recipe.dietary_tags)?;
        let ingredients = serde_json::to_string(&recipe.ingredients)?;
        let instructions = serde_json::to_string(&recipe.instructions)?;

        sqlx::query(
            r#"
            INSERT INTO recipes (
                id, title, image, cooking_time_min, difficulty,
                dietary_tags, ingredients, instructions, created_at, updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, datetime('now'), datetime('now'))
            "#,
        )
        .bind(&recipe.id)
        .bind(&recipe.title)
        .bind(&recipe.image)
        .bind(recipe.cooking_time as i64)
        .bind(&recipe.difficulty)
        .bind(&dietary_tags)
        .bind(&ingredients)
        .bind(&instructions)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Decode one row into the canonical shape. JSON columns are parsed
/// defensively: a malformed column is logged and defaults to empty
/// instead of failing the whole candidate set.
fn row_to_recipe(row: &sqlx::sqlite::SqliteRow) -> Recipe {
    let id: String = row.get("id");

    let ingredient_docs: Vec<IngredientDocument> =
        parse_json_column(row.get("ingredients"), &id, "ingredients");
    let instruction_docs: Vec<InstructionDocument> =
        parse_json_column(row.get("instructions"), &id, "instructions");
    let dietary_tags: Vec<String> = parse_json_column(row.get("dietary_tags"), &id, "dietary_tags");

    Recipe {
        title: row.get("title"),
        image: row.get("image"),
        cooking_time: row.get::<i64, _>("cooking_time_min").max(0) as u32,
        difficulty: row.get("difficulty"),
        dietary_tags,
        ingredients: ingredient_docs.into_iter().map(Ingredient::from).collect(),
        instructions: instruction_docs
            .into_iter()
            .map(|doc| InstructionStep {
                step: doc.step,
                description: doc.description,
            })
            .collect(),
        id,
    }
}

fn parse_json_column<T: DeserializeOwned + Default>(raw: String, id: &str, column: &str) -> T {
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(
                recipe_id = %id,
                column,
                error = %err,
                "malformed JSON column, defaulting to empty"
            );
            T::default()
        }
    }
}
