//! Recipe store boundary.
//!
//! The matcher only needs recipes in the canonical shape; where they come
//! from is this crate's problem. `RecipeStore` is the consumed interface,
//! `SqliteRecipeStore` the shipped implementation, and the document
//! adapter absorbs the field-name drift of upstream recipe payloads so
//! schema inconsistencies never leak past this boundary.

pub mod document;
pub mod error;
pub mod sqlite;

use async_trait::async_trait;
use platefinder_matching::Recipe;

pub use document::{IngredientDocument, InstructionDocument, RecipeDocument};
pub use error::StoreError;
pub use sqlite::SqliteRecipeStore;

/// Advisory pre-filter hints. A store may use them to narrow a scan and
/// may equally ignore them; the matcher re-applies the exact dietary gate
/// either way.
#[derive(Debug, Clone, Default)]
pub struct FilterHints {
    pub dietary_tags: Vec<String>,
}

/// The collaborator interface the matching core consumes.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Fetch the candidate set for one search.
    async fn fetch_candidates(&self, hints: Option<&FilterHints>)
        -> Result<Vec<Recipe>, StoreError>;

    /// Fetch a single recipe, `None` when the id is unknown.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    /// Persist a new recipe.
    async fn insert(&self, recipe: &Recipe) -> Result<(), StoreError>;
}
