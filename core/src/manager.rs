//! The todo manager: CRUD over a keyed collection of todo items.
//!
//! Missing identifiers are never an error here. `get` answers with an empty
//! [`Optional`], and the mutating operations quietly do nothing, reporting
//! through their `bool` return whether a record was touched.

use crate::environment::{IdGenerator, SequentialIds};
use crate::optional::Optional;
use crate::types::{TodoId, TodoItem};
use std::collections::BTreeMap;

/// Owns the todo collection and hands out identifiers for new items.
///
/// Items are keyed by [`TodoId`] in a `BTreeMap`, so [`list`](Self::list)
/// always yields them in ascending identifier order.
#[derive(Debug, Clone)]
pub struct TodoManager<G = SequentialIds> {
    todos: BTreeMap<TodoId, TodoItem>,
    ids: G,
}

impl TodoManager<SequentialIds> {
    /// Creates an empty manager numbering items from 0
    #[must_use]
    pub const fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }
}

impl Default for TodoManager<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TodoManager<G> {
    /// Creates an empty manager drawing identifiers from `ids`
    #[must_use]
    pub const fn with_ids(ids: G) -> Self {
        Self {
            todos: BTreeMap::new(),
            ids,
        }
    }

    /// Adds an incomplete todo.
    ///
    /// See [`add_with_state`](Self::add_with_state).
    pub fn add(&mut self, description: impl Into<String>) -> Optional<TodoId> {
        self.add_with_state(description, false)
    }

    /// Adds a todo with the given completion flag.
    ///
    /// If an item with the same description and flag already exists nothing is
    /// stored and the returned optional is empty. Identifiers are only drawn
    /// for items that are not duplicates. The optional is also empty when the
    /// generator has run out of identifiers, or hands back one that is still
    /// in use; existing items are never overwritten.
    pub fn add_with_state(
        &mut self,
        description: impl Into<String>,
        is_complete: bool,
    ) -> Optional<TodoId> {
        let description = description.into();

        if self
            .todos
            .values()
            .any(|todo| todo.matches(&description, is_complete))
        {
            tracing::debug!(%description, is_complete, "Skipping duplicate todo");
            return Optional::none();
        }

        let Some(id) = self.ids.next_id() else {
            tracing::warn!(%description, "Identifiers exhausted, todo not added");
            return Optional::none();
        };
        if self.todos.contains_key(&id) {
            tracing::warn!(%id, %description, "Identifier already in use, todo not added");
            return Optional::none();
        }

        tracing::debug!(%id, %description, is_complete, "Adding todo");
        self.todos.insert(id, TodoItem::new(id, description, is_complete));
        Optional::some(id)
    }

    /// Looks up a todo by identifier
    #[must_use]
    pub fn get(&self, id: TodoId) -> Optional<&TodoItem> {
        self.todos.get(&id).into()
    }

    /// Flips the completion flag of the stored item.
    ///
    /// Returns `false`, and does nothing else, when no item has that id.
    pub fn update_state(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.todos.get_mut(&id) else {
            tracing::debug!(%id, "Toggle ignored, no such todo");
            return false;
        };

        todo.toggle();
        tracing::debug!(%id, is_complete = todo.is_complete, "Toggled todo");
        true
    }

    /// Replaces the description of the stored item, keeping its flag and id.
    ///
    /// Returns `false`, and does nothing else, when no item has that id.
    pub fn edit(&mut self, id: TodoId, description: impl Into<String>) -> bool {
        let Some(todo) = self.todos.get_mut(&id) else {
            tracing::debug!(%id, "Edit ignored, no such todo");
            return false;
        };

        todo.description = description.into();
        tracing::debug!(%id, description = %todo.description, "Edited todo");
        true
    }

    /// Removes the item. Its identifier is never handed out again.
    ///
    /// Returns `false` when no item has that id.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let removed = self.todos.remove(&id).is_some();
        tracing::debug!(%id, removed, "Delete todo");
        removed
    }

    /// All items in ascending identifier order
    pub fn list(&self) -> impl Iterator<Item = &TodoItem> {
        self.todos.values()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether there are no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.values().filter(|t| t.is_complete).count()
    }
}
