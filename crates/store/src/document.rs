//! Adapter for duck-typed upstream recipe documents.
//!
//! Recipe payloads arrive with inconsistent field names (`name` vs
//! `title`, `image` vs `imageUrl`, `tags` vs `dietaryTags`, bare-string
//! ingredients vs `{name, amount, unit}` objects). Everything is folded
//! into the canonical [`Recipe`] here, once, so the matcher and the web
//! layer only ever see one shape. Missing collections default to empty
//! rather than failing the whole document.

use platefinder_matching::{Ingredient, InstructionStep, Recipe};
use serde::{Deserialize, Serialize};

/// An ingredient as found in the wild: either a bare name or a detailed
/// object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientDocument {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        amount: Option<String>,
        #[serde(default)]
        unit: Option<String>,
    },
}

impl From<IngredientDocument> for Ingredient {
    fn from(doc: IngredientDocument) -> Self {
        match doc {
            IngredientDocument::Name(name) => Ingredient::named(name),
            IngredientDocument::Detailed { name, amount, unit } => Ingredient {
                name,
                amount,
                unit,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstructionDocument {
    pub step: u32,
    pub description: String,
}

/// One upstream recipe document, tolerant of every naming variant seen
/// across versions of the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDocument {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default, alias = "imageUrl", alias = "image_url")]
    pub image: Option<String>,
    #[serde(default, alias = "cooking_time", alias = "cookingTimeMinutes")]
    pub cooking_time: u32,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, alias = "tags")]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientDocument>,
    #[serde(default)]
    pub instructions: Vec<InstructionDocument>,
}

impl RecipeDocument {
    /// Canonicalize, using `fallback_id` when the document carries none.
    pub fn into_recipe(self, fallback_id: impl Into<String>) -> Recipe {
        Recipe {
            id: self.id.unwrap_or_else(|| fallback_id.into()),
            title: self.title,
            image: self.image,
            cooking_time: self.cooking_time,
            difficulty: self.difficulty,
            dietary_tags: self.dietary_tags,
            ingredients: self.ingredients.into_iter().map(Ingredient::from).collect(),
            instructions: self
                .instructions
                .into_iter()
                .map(|doc| InstructionStep {
                    step: doc.step,
                    description: doc.description,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_field_names_parse() {
        let doc: RecipeDocument = serde_json::from_str(
            r#"{
                "id": "r1",
                "title": "Tomato Soup",
                "image": "soup.jpg",
                "cookingTime": 25,
                "dietaryTags": ["Vegetarian"],
                "ingredients": [{"name": "tomato", "amount": "4", "unit": "pieces"}],
                "instructions": [{"step": 1, "description": "Simmer."}]
            }"#,
        )
        .unwrap();
        let recipe = doc.into_recipe("fallback");
        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.cooking_time, 25);
        assert_eq!(recipe.ingredients[0].name, "tomato");
        assert_eq!(recipe.ingredients[0].unit.as_deref(), Some("pieces"));
    }

    #[test]
    fn drifted_field_names_parse() {
        let doc: RecipeDocument = serde_json::from_str(
            r#"{
                "name": "Beggar's Purse",
                "imageUrl": "purse.jpg",
                "cooking_time": 40,
                "tags": ["Vegan"],
                "ingredients": ["flour", "egg"]
            }"#,
        )
        .unwrap();
        let recipe = doc.into_recipe("generated-id");
        assert_eq!(recipe.id, "generated-id");
        assert_eq!(recipe.title, "Beggar's Purse");
        assert_eq!(recipe.image.as_deref(), Some("purse.jpg"));
        assert_eq!(recipe.dietary_tags, vec!["Vegan"]);
        assert_eq!(recipe.ingredients[1].name, "egg");
        assert!(recipe.ingredients[1].amount.is_none());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let doc: RecipeDocument =
            serde_json::from_str(r#"{"title": "Mystery Dish", "cookingTime": 5}"#).unwrap();
        let recipe = doc.into_recipe("x");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.dietary_tags.is_empty());
    }
}
