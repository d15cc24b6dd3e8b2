use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A pantry item or recipe component. Only the name participates in
/// matching; amount and unit are carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn named(name: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            amount: None,
            unit: None,
        }
    }
}

/// A single numbered instruction step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub step: u32,
    pub description: String,
}

/// Canonical recipe shape. Upstream documents name these fields
/// inconsistently (`name`/`title`, `image`/`imageUrl`, `tags`/`dietaryTags`);
/// the store boundary adapts them into this one type so the matcher never
/// sees the drift. Read-only input to a search, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Total cooking time in minutes.
    pub cooking_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<InstructionStep>,
}

/// One scored recipe, valid for the lifetime of a single search.
///
/// `matching_ingredients_count` counts pantry entries that matched at
/// least one recipe ingredient, while `missing_ingredients` is derived by
/// walking the recipe's own ingredient list. The two are computed from
/// different iterations and are not complementary partitions; with
/// many-to-many substring matches both can be nonzero for the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// 0-100, or `None` when the search carried no pantry at all.
    pub match_percentage: Option<u8>,
    pub matching_ingredients_count: usize,
    pub missing_ingredients_count: usize,
    pub missing_ingredients: Vec<String>,
}

/// Result ordering requested by the client.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortMethod {
    /// Descending by match percentage.
    #[default]
    BestMatch,
    /// Ascending by missing-ingredient count.
    FewestMissing,
    /// Ascending by cooking time.
    Quickest,
}
