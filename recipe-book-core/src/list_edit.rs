//! Ordered-collection edit operations.
//!
//! Generic over the element type; [`crate::models::Recipe`] applies them to
//! both its ingredient and step lists. Elements travel whole, so stable ids
//! and the relative order of untouched elements survive every operation.
//!
//! Positions always resolve against the list as it was when the call was
//! made; there is no cascading re-indexing mid-operation. Out-of-bounds
//! positions are a caller-contract violation, asserted in debug builds.

use std::collections::BTreeSet;

/// Remove the elements at `indices` in a single atomic step.
///
/// Duplicate positions in the set collapse; the order of positions within
/// the set does not matter. Every index must be in bounds.
pub fn remove_at<T>(items: &mut Vec<T>, indices: &[usize]) {
    let set: BTreeSet<usize> = indices.iter().copied().collect();
    debug_assert!(
        set.last().map_or(true, |&last| last < items.len()),
        "remove_at: index out of bounds"
    );

    // Walk the set back to front so earlier removals cannot shift the
    // positions still pending.
    for &index in set.iter().rev() {
        items.remove(index);
    }
}

/// Move the elements at `source` to just before position `dest`.
///
/// Standard move semantics: the moved elements are extracted first (keeping
/// their relative order), then reinserted at `dest` adjusted for the
/// extracted predecessors. `dest` is a position in the pre-call list and may
/// be anywhere in `0..=len`, including inside the source range.
pub fn move_to<T>(items: &mut Vec<T>, source: &[usize], dest: usize) {
    let set: BTreeSet<usize> = source.iter().copied().collect();
    debug_assert!(
        set.last().map_or(true, |&last| last < items.len()),
        "move_to: source index out of bounds"
    );
    debug_assert!(dest <= items.len(), "move_to: destination out of bounds");

    let adjusted = dest - set.range(..dest).count();

    let mut moved = Vec::with_capacity(set.len());
    for &index in set.iter().rev() {
        moved.push(items.remove(index));
    }
    moved.reverse();

    items.splice(adjusted..adjusted, moved);
}
