//! Pure, order-preserving filtering of the loaded problem list.
//!
//! Two independent predicates, AND-combined: category equality and free-text
//! substring search. Both are Unicode case-insensitive via `to_lowercase`.
//! Filtering never touches the model; the view layer applies it on demand.

use crate::model::Problem;

/// A problem matches a selected category when its own `category` field equals
/// it case-insensitively. Problems without a category never match a specific
/// selection but pass when no category is selected.
#[must_use]
pub fn matches_category(problem: &Problem, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(selected) => problem
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == selected.to_lowercase()),
    }
}

/// Case-insensitive substring match over title, description, and domain.
/// An empty or whitespace-only query matches everything.
#[must_use]
pub fn matches_query(problem: &Problem, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    problem.title.to_lowercase().contains(&query)
        || problem.description.to_lowercase().contains(&query)
        || problem.domain.to_lowercase().contains(&query)
}

/// Applies both predicates, preserving the input order.
#[must_use]
pub fn filter_problems<'a>(
    problems: &'a [Problem],
    selected_category: Option<&str>,
    query: &str,
) -> Vec<&'a Problem> {
    problems
        .iter()
        .filter(|p| matches_category(p, selected_category) && matches_query(p, query))
        .collect()
}
