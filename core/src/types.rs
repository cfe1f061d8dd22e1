//! Domain types for the todo list.
//!
//! A todo list is a collection of items, each with a short description and a
//! completion flag, named by an identifier that never changes.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub description: String,
    /// Whether the todo is completed
    pub is_complete: bool,
}

impl TodoItem {
    /// Creates a new todo item
    #[must_use]
    pub const fn new(id: TodoId, description: String, is_complete: bool) -> Self {
        Self {
            id,
            description,
            is_complete,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.is_complete = !self.is_complete;
    }

    /// Whether this item has the given description and completion flag
    #[must_use]
    pub fn matches(&self, description: &str, is_complete: bool) -> bool {
        self.is_complete == is_complete && self.description == description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId::new(7).to_string(), "7");
    }

    #[test]
    fn todo_id_parses_trimmed_numbers() {
        assert_eq!(" 12 ".parse::<TodoId>(), Ok(TodoId::new(12)));
        assert!("twelve".parse::<TodoId>().is_err());
        assert!("-1".parse::<TodoId>().is_err());
    }

    #[test]
    fn todo_item_new() {
        let item = TodoItem::new(TodoId::new(3), "Test todo".to_string(), false);

        assert_eq!(item.id, TodoId::new(3));
        assert_eq!(item.description, "Test todo");
        assert!(!item.is_complete);
    }

    #[test]
    fn todo_item_toggle_is_self_inverse() {
        let mut item = TodoItem::new(TodoId::new(0), "Test".to_string(), false);

        item.toggle();
        assert!(item.is_complete);

        item.toggle();
        assert!(!item.is_complete);
    }

    #[test]
    fn todo_item_matches_on_description_and_flag() {
        let item = TodoItem::new(TodoId::new(0), "Walk dog".to_string(), true);

        assert!(item.matches("Walk dog", true));
        assert!(!item.matches("Walk dog", false));
        assert!(!item.matches("Walk cat", true));
    }
}
