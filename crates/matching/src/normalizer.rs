//! Canonicalization and fuzzy equivalence for ingredient names.

/// Canonical comparable form of an ingredient name: trimmed and
/// lowercased. No stemming, no pluralization handling, no unit stripping.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Bidirectional substring containment on normalized names.
///
/// This is the sole fuzzy-matching rule: "egg" matches "eggs" and
/// "tomato" matches "tomato sauce" without a dictionary or edit-distance
/// pass. The cost is false positives on short fragments ("oil" matches
/// "olive oil" and "vegetable oil" alike, and "egg" matches "beggar");
/// that imprecision is accepted, not a bug to fix here.
///
/// Empty or whitespace-only input never matches anything, including
/// another empty string.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}
