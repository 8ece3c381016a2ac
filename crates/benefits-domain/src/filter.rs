//! Name search over the benefit list.

use crate::model::Benefit;

/// Returns `true` if `query` selects a benefit called `name`.
///
/// A blank query selects everything. Otherwise the lower-cased query must be
/// a substring of the lower-cased name; the query is not trimmed.
pub fn matches_query(name: &str, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Stable filter by name. Provider, notes and charges are never consulted.
pub fn filter_benefits<'a>(benefits: &'a [Benefit], query: &str) -> Vec<&'a Benefit> {
    benefits.iter().filter(|b| matches_query(&b.name, query)).collect()
}
