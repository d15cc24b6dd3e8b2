use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use platefinder_matching::{names_match, Recipe};
use platefinder_store::{IngredientDocument, InstructionDocument, RecipeDocument, RecipeStore};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Comma-separated ingredient names; a recipe is returned only if
    /// every listed ingredient matches one of its ingredients.
    pub ingredients: Option<String>,
}

/// GET /api/recipes[?ingredients=a,b,c]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = state.store.fetch_candidates(None).await?;

    let Some(raw) = params.ingredients else {
        return Ok(Json(recipes));
    };

    let requested: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();
    if requested.is_empty() {
        return Ok(Json(recipes));
    }

    let filtered = recipes
        .into_iter()
        .filter(|recipe| {
            requested.iter().all(|entry| {
                recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| names_match(entry, &ingredient.name))
            })
        })
        .collect();

    Ok(Json(filtered))
}

/// GET /api/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state
        .store
        .fetch_by_id(&id)
        .await?
        .ok_or(AppError::RecipeNotFound(id))?;
    Ok(Json(recipe))
}

/// Body of POST /api/recipes. Accepts the same drifted field names the
/// store adapter does, but validates before anything is persisted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    #[serde(alias = "name")]
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    #[serde(alias = "cooking_time")]
    #[validate(range(min = 1, message = "cookingTime must be at least 1 minute"))]
    pub cooking_time: u32,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, alias = "tags")]
    pub dietary_tags: Vec<String>,
    #[validate(
        length(min = 1, message = "at least one ingredient is required"),
        custom(function = "all_ingredients_named")
    )]
    pub ingredients: Vec<IngredientDocument>,
    #[serde(default)]
    pub instructions: Vec<InstructionDocument>,
}

fn all_ingredients_named(ingredients: &[IngredientDocument]) -> Result<(), ValidationError> {
    let all_named = ingredients.iter().all(|ingredient| match ingredient {
        IngredientDocument::Name(name) => !name.trim().is_empty(),
        IngredientDocument::Detailed { name, .. } => !name.trim().is_empty(),
    });
    if all_named {
        Ok(())
    } else {
        Err(ValidationError::new("blank_ingredient_name"))
    }
}

/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecipeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let document = RecipeDocument {
        id: None,
        title: request.title,
        image: request.image,
        cooking_time: request.cooking_time,
        difficulty: request.difficulty,
        dietary_tags: request.dietary_tags,
        ingredients: request.ingredients,
        instructions: request.instructions,
    };
    let recipe = document.into_recipe(Uuid::new_v4().to_string());

    state.store.insert(&recipe).await?;
    tracing::info!(recipe_id = %recipe.id, title = %recipe.title, "recipe created");

    Ok((StatusCode::CREATED, Json(recipe)))
}
