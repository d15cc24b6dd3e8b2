use axum::{extract::rejection::JsonRejection, extract::State, Json};
use platefinder_matching::{MatchResult, SortMethod};
use platefinder_store::{FilterHints, RecipeStore};
use serde::Deserialize;

use crate::error::AppError;
use crate::routes::AppState;

/// Body of POST /api/recipes/search. Every field is optional; an absent
/// pantry means "no ingredient search", an absent sort defaults to best
/// match.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub ingredients: Vec<String>,
    pub dietary_filters: Vec<String>,
    pub sort_by: SortMethod,
}

/// POST /api/recipes/search
///
/// Fetches the candidate set from the store (dietary filters passed down
/// as advisory hints), scores it against the pantry, and returns the
/// ordered results as a JSON array. A malformed body (non-array fields,
/// unknown sort name) is rejected with 422 before any matching runs.
pub async fn search_recipes(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<MatchResult>>, AppError> {
    let Json(request) = payload?;

    let hints = (!request.dietary_filters.is_empty()).then(|| FilterHints {
        dietary_tags: request.dietary_filters.clone(),
    });
    let candidates = state.store.fetch_candidates(hints.as_ref()).await?;
    let candidate_count = candidates.len();

    let results = platefinder_matching::search(
        &request.ingredients,
        &request.dietary_filters,
        candidates,
        request.sort_by,
    );

    tracing::debug!(
        pantry_size = request.ingredients.len(),
        filters = request.dietary_filters.len(),
        candidates = candidate_count,
        results = results.len(),
        sort = %request.sort_by,
        "search completed"
    );

    Ok(Json(results))
}
