//! Scoring and ranking of candidate recipes against a pantry.

use crate::normalizer::{names_match, normalize};
use crate::types::{MatchResult, Recipe, SortMethod};

/// Score every candidate against the pantry and dietary filters, then
/// order the survivors.
///
/// Policy decisions applied uniformly:
/// - Pantry entries are normalized, blank entries dropped, duplicates
///   deduplicated before any scoring, so redundant input cannot inflate a
///   match percentage.
/// - An empty (or all-blank) pantry means "no ingredient search was
///   performed": every candidate passes the ingredient gate and carries
///   `match_percentage: None` rather than a trivially true or false score.
/// - Dietary filters use AND semantics. A recipe must carry every active
///   filter tag; a user filtering on Vegan must never see a non-vegan
///   recipe, so OR semantics would be a correctness bug.
///
/// Stateless and side-effect free; identical inputs produce identical,
/// order-stable output.
pub fn search(
    pantry: &[String],
    dietary_filters: &[String],
    candidates: Vec<Recipe>,
    sort_method: SortMethod,
) -> Vec<MatchResult> {
    let pantry = sanitize_pantry(pantry);

    let mut results: Vec<MatchResult> = candidates
        .into_iter()
        .filter(|recipe| satisfies_all_filters(recipe, dietary_filters))
        .filter_map(|recipe| score_recipe(recipe, &pantry))
        .collect();

    sort_results(&mut results, sort_method);
    results
}

/// Normalize, drop blanks, dedup preserving first-seen order.
fn sanitize_pantry(pantry: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for entry in pantry {
        let normalized = normalize(entry);
        if !normalized.is_empty() && !seen.contains(&normalized) {
            seen.push(normalized);
        }
    }
    seen
}

/// AND across active filters: every selected tag must be present on the
/// recipe. Tag comparison is case-insensitive; an empty filter set is no
/// constraint.
fn satisfies_all_filters(recipe: &Recipe, dietary_filters: &[String]) -> bool {
    dietary_filters.iter().all(|filter| {
        let filter = filter.trim();
        filter.is_empty()
            || recipe
                .dietary_tags
                .iter()
                .any(|tag| tag.trim().eq_ignore_ascii_case(filter))
    })
}

/// Compute counts and percentage for one recipe, or `None` when it fails
/// the ingredient gate (non-empty pantry with zero matches).
///
/// The matching count iterates the pantry and the missing list iterates
/// the recipe; the asymmetry is the observed behavior of this scoring
/// rule and is kept as-is rather than collapsed into a single bipartite
/// matching.
fn score_recipe(recipe: Recipe, pantry: &[String]) -> Option<MatchResult> {
    if pantry.is_empty() {
        let missing: Vec<String> = recipe
            .ingredients
            .iter()
            .map(|ingredient| ingredient.name.clone())
            .collect();
        return Some(MatchResult {
            match_percentage: None,
            matching_ingredients_count: 0,
            missing_ingredients_count: missing.len(),
            missing_ingredients: missing,
            recipe,
        });
    }

    let matching_count = pantry
        .iter()
        .filter(|entry| {
            recipe
                .ingredients
                .iter()
                .any(|ingredient| names_match(entry, &ingredient.name))
        })
        .count();

    if matching_count == 0 {
        return None;
    }

    let missing: Vec<String> = recipe
        .ingredients
        .iter()
        .filter(|ingredient| !pantry.iter().any(|entry| names_match(entry, &ingredient.name)))
        .map(|ingredient| ingredient.name.clone())
        .collect();

    let percentage = match_percentage(matching_count, recipe.ingredients.len());

    Some(MatchResult {
        match_percentage: Some(percentage),
        matching_ingredients_count: matching_count,
        missing_ingredients_count: missing.len(),
        missing_ingredients: missing,
        recipe,
    })
}

/// `round(matching / total * 100)`, clamped to 100 because the matching
/// count iterates the pantry and can exceed the recipe's ingredient count
/// under many-to-one substring matches. A zero-ingredient recipe scores 0
/// rather than dividing by zero.
fn match_percentage(matching_count: usize, total_ingredients: usize) -> u8 {
    if total_ingredients == 0 {
        return 0;
    }
    let ratio = matching_count as f64 / total_ingredients as f64 * 100.0;
    ratio.round().min(100.0) as u8
}

/// All three orders use a stable sort, so ties keep insertion order and
/// repeated searches over an unchanged candidate set stay reproducible.
fn sort_results(results: &mut [MatchResult], sort_method: SortMethod) {
    match sort_method {
        SortMethod::BestMatch => {
            results.sort_by(|a, b| {
                b.match_percentage
                    .unwrap_or(0)
                    .cmp(&a.match_percentage.unwrap_or(0))
            });
        }
        SortMethod::FewestMissing => {
            results.sort_by_key(|result| result.missing_ingredients_count);
        }
        SortMethod::Quickest => {
            results.sort_by_key(|result| result.recipe.cooking_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            image: None,
            cooking_time: 30,
            difficulty: None,
            dietary_tags: Vec::new(),
            ingredients: ingredients.iter().copied().map(Ingredient::named).collect(),
            instructions: Vec::new(),
        }
    }

    #[test]
    fn sanitize_drops_blanks_and_duplicates() {
        let pantry = vec![
            " Egg ".to_string(),
            "egg".to_string(),
            "".to_string(),
            "  ".to_string(),
            "Milk".to_string(),
        ];
        assert_eq!(sanitize_pantry(&pantry), vec!["egg", "milk"]);
    }

    #[test]
    fn duplicate_pantry_entries_do_not_change_score() {
        let once = search(
            &["tomato".to_string()],
            &[],
            vec![recipe("1", &["tomato", "basil", "salt"])],
            SortMethod::BestMatch,
        );
        let twice = search(
            &["tomato".to_string(), "Tomato ".to_string()],
            &[],
            vec![recipe("1", &["tomato", "basil", "salt"])],
            SortMethod::BestMatch,
        );
        assert_eq!(once[0].match_percentage, twice[0].match_percentage);
        assert_eq!(once[0].matching_ingredients_count, 1);
    }

    #[test]
    fn percentage_is_clamped_to_100() {
        // Two distinct pantry entries both match the single ingredient.
        let results = search(
            &["oil".to_string(), "olive".to_string()],
            &[],
            vec![recipe("1", &["olive oil"])],
            SortMethod::BestMatch,
        );
        assert_eq!(results[0].match_percentage, Some(100));
        assert_eq!(results[0].matching_ingredients_count, 2);
    }

    #[test]
    fn zero_ingredient_recipe_scores_zero() {
        let results = search(
            &["egg".to_string()],
            &[],
            vec![recipe("1", &[]), recipe("2", &["egg"])],
            SortMethod::BestMatch,
        );
        // The empty recipe has no matching ingredients and is gated out;
        // only the real match survives.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].recipe.id, "2");
        assert_eq!(match_percentage(0, 0), 0);
    }

    #[test]
    fn empty_pantry_includes_everything_unscored() {
        let results = search(
            &[],
            &[],
            vec![recipe("1", &["egg"]), recipe("2", &["milk", "flour"])],
            SortMethod::BestMatch,
        );
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.match_percentage.is_none()));
        // Insertion order preserved under the unscored sort.
        assert_eq!(results[0].recipe.id, "1");
        assert_eq!(results[1].recipe.id, "2");
    }

    #[test]
    fn blank_only_pantry_is_treated_as_empty() {
        let results = search(
            &["  ".to_string(), "".to_string()],
            &[],
            vec![recipe("1", &["egg"])],
            SortMethod::BestMatch,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_percentage, None);
    }

    #[test]
    fn dietary_filters_use_and_semantics() {
        let mut vegetarian_only = recipe("1", &["tofu"]);
        vegetarian_only.dietary_tags = vec!["Vegetarian".to_string()];
        let mut vegan = recipe("2", &["tofu"]);
        vegan.dietary_tags = vec!["Vegetarian".to_string(), "Vegan".to_string()];

        let filters = vec!["Vegetarian".to_string(), "Vegan".to_string()];
        let results = search(
            &["tofu".to_string()],
            &filters,
            vec![vegetarian_only, vegan],
            SortMethod::BestMatch,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].recipe.id, "2");
    }

    #[test]
    fn dietary_filter_excludes_even_perfect_ingredient_matches() {
        let results = search(
            &["tofu".to_string()],
            &["Vegan".to_string()],
            vec![recipe("1", &["tofu"])],
            SortMethod::BestMatch,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn tomato_garlic_basil_scenario() {
        let results = search(
            &["tomato".to_string(), "garlic".to_string()],
            &[],
            vec![recipe("1", &["tomato sauce", "garlic", "basil"])],
            SortMethod::BestMatch,
        );
        let result = &results[0];
        assert_eq!(result.matching_ingredients_count, 2);
        assert_eq!(result.missing_ingredients, vec!["basil"]);
        assert_eq!(result.missing_ingredients_count, 1);
        assert_eq!(result.match_percentage, Some(67));
    }
}
