//! Item classification and display ordering.
//!
//! Navigation order must be visually predictable across renders of the same
//! input, so sorting is stable: siblings with equal importance (or none at
//! all) keep their input order. Nothing here mutates its input; every
//! function returns a fresh `Vec` of references.

use crate::types::{NavEntry, PageItem};
use std::cmp::Ordering;

/// Whether an item has anything to show in a content block.
///
/// True for a non-empty excerpt, a non-empty summary, or at least one media
/// entry with a filename.
pub fn item_is_non_empty(item: &PageItem) -> bool {
    let has_text = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());
    has_text(&item.excerpt) || has_text(&item.summary) || item.media.iter().any(|m| !m.is_empty())
}

/// Descending importance; a missing importance sorts after any present one.
fn compare_importance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by descending importance.
///
/// ```
/// use docpage_kit::ordering::sort_by_importance;
/// use docpage_kit::types::NavItem;
///
/// let item = |id: &str, importance: Option<f64>| NavItem {
///     id: id.to_string(),
///     importance,
///     ..Default::default()
/// };
/// let items = [item("a", None), item("b", Some(1.0)), item("c", Some(5.0))];
/// let ids: Vec<&str> = sort_by_importance(&items).iter().map(|i| i.id.as_str()).collect();
/// assert_eq!(ids, ["c", "b", "a"]);
/// ```
pub fn sort_by_importance<T: NavEntry>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    // `sort_by` is a stable merge sort; equal keys keep input order.
    sorted.sort_by(|a, b| compare_importance(a.importance(), b.importance()));
    sorted
}

/// Children shown in the navigation menu: those with their own children or
/// contents, importance-sorted.
pub fn displayable_children<T: NavEntry>(item: &T) -> Vec<&T> {
    let mut children: Vec<&T> = item
        .children()
        .iter()
        .filter(|c| c.is_navigable())
        .collect();
    children.sort_by(|a, b| compare_importance(a.importance(), b.importance()));
    children
}

/// Items shown as preview cards or mini ToC entries: non-empty ones,
/// importance-sorted.
pub fn previewable(items: &[PageItem]) -> Vec<&PageItem> {
    sort_by_importance(items)
        .into_iter()
        .filter(|i| item_is_non_empty(i))
        .collect()
}
