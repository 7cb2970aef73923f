//! Index arithmetic shared by column and card drag-and-drop.
//!
//! Both operations are remove-then-insert: the target index is interpreted
//! against the sequence *after* the moved element has been taken out.

/// Moves the element at `from` to `to`, shifting everything in between by
/// one. A `to` past the end appends. An out-of-range `from` returns the
/// sequence unchanged.
pub fn reorder<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= items.len() {
        return items;
    }
    let item = items.remove(from);
    insert_clamped(&mut items, to, item);
    items
}

/// Inserts at `index`, or at the tail when `index` is past the end.
/// Returns the position the item actually landed at.
pub fn insert_clamped<T>(items: &mut Vec<T>, index: usize, item: T) -> usize {
    let index = index.min(items.len());
    items.insert(index, item);
    index
}
