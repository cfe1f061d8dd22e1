//! # Tickbox Core
//!
//! The structured part of tickbox: a presence/absence container and the
//! in-memory todo manager.
//!
//! ## Core Concepts
//!
//! - **Optional**: `Optional<T>` guards access to a value that may be missing
//! - **Todo item**: description, completion flag and a stable [`TodoId`]
//! - **Manager**: [`TodoManager`] owns the collection and its CRUD operations
//! - **Environment**: identifier generation is injected via [`environment::IdGenerator`]
//!
//! ## Example
//!
//! ```
//! use tickbox_core::TodoManager;
//!
//! let mut manager = TodoManager::new();
//! let id = manager.add("Buy milk").into_option().unwrap_or_default();
//!
//! manager.update_state(id);
//!
//! let done = manager.get(id).map(|todo| todo.is_complete);
//! assert!(done.value_or(false));
//! ```

pub mod manager;
pub mod optional;
pub mod types;

pub use manager::TodoManager;
pub use optional::{Optional, OptionalError};
pub use types::{TodoId, TodoItem};

/// Environment module - Dependency injection traits
///
/// The manager never reaches for hidden global state. Anything it needs from
/// the outside world is expressed as a trait and handed to it at construction.
pub mod environment {
    use crate::types::TodoId;

    /// `IdGenerator` trait - abstracts identifier assignment for testability
    ///
    /// Implementations must hand out strictly increasing identifiers and never
    /// repeat one, even after the record it named has been deleted. Once the
    /// identifier space is used up they return `None` from then on.
    ///
    /// # Examples
    ///
    /// ```
    /// use tickbox_core::TodoId;
    /// use tickbox_core::environment::{IdGenerator, SequentialIds};
    ///
    /// let mut ids = SequentialIds::starting_at(10);
    /// assert_eq!(ids.next_id(), Some(TodoId::new(10)));
    /// assert_eq!(ids.next_id(), Some(TodoId::new(11)));
    /// ```
    pub trait IdGenerator {
        /// Produce the next unused identifier, or `None` when exhausted
        fn next_id(&mut self) -> Option<TodoId>;
    }

    /// Counter-backed generator handing out `start, start + 1, ...`
    #[derive(Debug, Clone)]
    pub struct SequentialIds {
        /// `None` once `u64::MAX` has been handed out
        next: Option<u64>,
    }

    impl SequentialIds {
        /// Create a generator whose first identifier is 0
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(0)
        }

        /// Create a generator whose first identifier is `start`
        #[must_use]
        pub const fn starting_at(start: u64) -> Self {
            Self { next: Some(start) }
        }

        /// The identifier the next call to `next_id` will return
        #[must_use]
        pub fn peek(&self) -> Option<TodoId> {
            self.next.map(TodoId::new)
        }
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&mut self) -> Option<TodoId> {
            let id = self.next?;
            self.next = id.checked_add(1);
            Some(TodoId::new(id))
        }
    }
}
