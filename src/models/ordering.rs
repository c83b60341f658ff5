//! Display ordering for user-arranged lists
//!
//! Debts and goals are shown in an order the user controls. Moving an entry
//! splices it out of the list, inserts it at the new position and renumbers
//! every `sort_order` so positions stay dense (`0..n`).

use std::fmt;

/// Anything with a user-controlled display position
pub trait Positioned {
    fn sort_order(&self) -> i32;
    fn set_sort_order(&mut self, order: i32);
}

/// Error returned when a move refers to a position outside the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {} is out of range (list has {} entries)",
            self.index + 1,
            self.len
        )
    }
}

impl std::error::Error for ReorderError {}

/// Move the item at `from` to `to` and renumber the whole list
pub fn move_item<T: Positioned>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), ReorderError> {
    let len = items.len();
    if from >= len {
        return Err(ReorderError { index: from, len });
    }
    if to >= len {
        return Err(ReorderError { index: to, len });
    }

    let item = items.remove(from);
    items.insert(to, item);
    renumber(items);
    Ok(())
}

/// Assign `sort_order` = index for every item
pub fn renumber<T: Positioned>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_sort_order(index as i32);
    }
}

/// Next free position at the end of a list
pub fn next_position<'a, T: Positioned + 'a>(items: impl IntoIterator<Item = &'a T>) -> i32 {
    items
        .into_iter()
        .map(|item| item.sort_order() + 1)
        .max()
        .unwrap_or(0)
}
