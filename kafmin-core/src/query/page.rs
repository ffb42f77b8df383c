//! Cursor positioning within an ordered listing.
//!
//! A page boundary is a skeleton entity decoded from a cursor token. Given
//! the ordering the listing was produced under, the next page is simply the
//! entries strictly after that boundary; no server-side session state is
//! involved.

use std::cmp::Ordering;

/// Keep the entries strictly after `cursor` under `order`.
///
/// `order` must be the same total ordering the listing was sorted with, and
/// must only dereference fields projected into the cursor; unprojected
/// fields compare as absent and sort last.
pub fn after_cursor<T>(
    items: Vec<T>,
    cursor: &T,
    order: impl Fn(&T, &T) -> Ordering,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| order(item, cursor) == Ordering::Greater)
        .collect()
}

/// Truncate a listing to one page of at most `limit` entries.
pub fn limit<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}
