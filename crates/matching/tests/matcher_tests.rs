use platefinder_matching::types::{Ingredient, Recipe};
use platefinder_matching::{names_match, search, SortMethod};

fn recipe_with(id: &str, cooking_time: u32, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        image: None,
        cooking_time,
        difficulty: None,
        dietary_tags: Vec::new(),
        ingredients: ingredients.iter().copied().map(Ingredient::named).collect(),
        instructions: Vec::new(),
    }
}

fn pantry(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

#[test]
fn percentage_stays_within_bounds_across_varied_inputs() {
    let pantries = [
        pantry(&[]),
        pantry(&["egg"]),
        pantry(&["egg", "eggs", "egg yolk"]),
        pantry(&["oil", "olive", "olive oil", "o"]),
    ];
    let recipes = [
        recipe_with("a", 10, &[]),
        recipe_with("b", 10, &["egg"]),
        recipe_with("c", 10, &["olive oil", "egg", "flour"]),
    ];

    for p in &pantries {
        let results = search(p, &[], recipes.to_vec(), SortMethod::BestMatch);
        for result in results {
            if let Some(pct) = result.match_percentage {
                assert!(pct <= 100, "recipe {} scored {}", result.recipe.id, pct);
            }
        }
    }
}

#[test]
fn substring_rule_matches_documented_cases() {
    assert!(names_match("egg", "eggs"));
    assert!(names_match("egg", "beggar"));
    assert!(!names_match("egg", "milk"));
}

#[test]
fn best_match_orders_descending_by_percentage() {
    // Percentages engineered as 40 (2/5), 90 (9/10), 70 (7/10).
    let r1 = recipe_with("1", 10, &["a", "b", "x1", "x2", "x3"]);
    let r2 = recipe_with(
        "2",
        10,
        &["a", "b", "c", "d", "e", "f", "g", "h", "i", "x1"],
    );
    let r3 = recipe_with("3", 10, &["a", "b", "c", "d", "e", "f", "g", "x1", "x2", "x3"]);
    let p = pantry(&["a", "b", "c", "d", "e", "f", "g", "h", "i"]);

    let results = search(&p, &[], vec![r1, r2, r3], SortMethod::BestMatch);
    let order: Vec<&str> = results.iter().map(|r| r.recipe.id.as_str()).collect();
    assert_eq!(order, vec!["2", "3", "1"]);
    assert_eq!(results[0].match_percentage, Some(90));
    assert_eq!(results[1].match_percentage, Some(70));
    assert_eq!(results[2].match_percentage, Some(40));
}

#[test]
fn fewest_missing_orders_ascending() {
    let r1 = recipe_with("1", 10, &["egg", "milk", "flour"]);
    let r2 = recipe_with("2", 10, &["egg"]);
    let r3 = recipe_with("3", 10, &["egg", "milk"]);
    let p = pantry(&["egg"]);

    let results = search(&p, &[], vec![r1, r2, r3], SortMethod::FewestMissing);
    let order: Vec<&str> = results.iter().map(|r| r.recipe.id.as_str()).collect();
    assert_eq!(order, vec!["2", "3", "1"]);
}

#[test]
fn quickest_orders_ascending_by_cooking_time() {
    let r1 = recipe_with("1", 45, &["egg"]);
    let r2 = recipe_with("2", 10, &["egg"]);
    let r3 = recipe_with("3", 30, &["egg"]);
    let p = pantry(&["egg"]);

    let results = search(&p, &[], vec![r1, r2, r3], SortMethod::Quickest);
    let order: Vec<&str> = results.iter().map(|r| r.recipe.id.as_str()).collect();
    assert_eq!(order, vec!["2", "3", "1"]);
}

#[test]
fn ties_keep_insertion_order() {
    let r1 = recipe_with("1", 20, &["egg", "milk"]);
    let r2 = recipe_with("2", 20, &["egg", "flour"]);
    let p = pantry(&["egg"]);

    let results = search(&p, &[], vec![r1, r2], SortMethod::BestMatch);
    let order: Vec<&str> = results.iter().map(|r| r.recipe.id.as_str()).collect();
    assert_eq!(order, vec!["1", "2"]);
}

#[test]
fn search_is_idempotent_and_order_stable() {
    let candidates = vec![
        recipe_with("1", 25, &["tomato sauce", "garlic", "basil"]),
        recipe_with("2", 15, &["garlic", "bread"]),
        recipe_with("3", 40, &["tomato", "onion"]),
    ];
    let p = pantry(&["tomato", "garlic"]);

    let first = search(&p, &[], candidates.clone(), SortMethod::BestMatch);
    let second = search(&p, &[], candidates, SortMethod::BestMatch);
    assert_eq!(first, second);
}

#[test]
fn empty_candidate_set_yields_empty_results() {
    let results = search(&pantry(&["egg"]), &[], Vec::new(), SortMethod::Quickest);
    assert!(results.is_empty());
}

#[test]
fn recipes_with_no_pantry_overlap_are_excluded() {
    let results = search(
        &pantry(&["egg"]),
        &[],
        vec![
            recipe_with("1", 10, &["milk", "flour"]),
            recipe_with("2", 10, &["egg", "flour"]),
        ],
        SortMethod::BestMatch,
    );
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].recipe.id, "2");
}
