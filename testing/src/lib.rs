//! # Tickbox Testing
//!
//! Testing utilities and helpers for tickbox.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A given/when/then harness for the todo manager
//! - Property-based testing strategies
//! - Log capture for tests
//!
//! ## Example
//!
//! ```
//! use tickbox_core::TodoId;
//! use tickbox_testing::ManagerTest;
//!
//! ManagerTest::new()
//!     .given_todo("Buy milk", false)
//!     .when(|manager| {
//!         manager.update_state(TodoId::new(0));
//!     })
//!     .then_todos(|todos| {
//!         assert!(todos[0].is_complete);
//!     })
//!     .run();
//! ```


pub use manager_test::ManagerTest;

/// Mock implementations for testing.
pub mod mocks {
    use tickbox_core::TodoId;
    use tickbox_core::environment::IdGenerator;

    /// Scripted identifier generator
    ///
    /// Hands out the given identifiers in order, then keeps counting up from
    /// the last one until `u64::MAX` has been used.
    ///
    /// # Example
    ///
    /// ```
    /// use tickbox_core::TodoId;
    /// use tickbox_core::environment::IdGenerator;
    /// use tickbox_testing::mocks::FixedIds;
    ///
    /// let mut ids = FixedIds::new([10, 20]);
    /// assert_eq!(ids.next_id(), Some(TodoId::new(10)));
    /// assert_eq!(ids.next_id(), Some(TodoId::new(20)));
    /// assert_eq!(ids.next_id(), Some(TodoId::new(21)));
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedIds {
        script: std::vec::IntoIter<u64>,
        last: Option<u64>,
    }

    impl FixedIds {
        /// Create a generator replaying `ids`
        ///
        /// # Panics
        ///
        /// Panics if `ids` is not strictly increasing, since an
        /// [`IdGenerator`] must never repeat an identifier.
        #[must_use]
        #[allow(clippy::panic)] // Test helper
        pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
            let ids: Vec<u64> = ids.into_iter().collect();
            assert!(
                ids.windows(2).all(|pair| pair[0] < pair[1]),
                "FixedIds must be strictly increasing, got {ids:?}"
            );
            Self {
                script: ids.into_iter(),
                last: None,
            }
        }
    }

    impl IdGenerator for FixedIds {
        fn next_id(&mut self) -> Option<TodoId> {
            let next = match self.script.next() {
                Some(scripted) => scripted,
                None => self.last.map_or(Some(0), |last| last.checked_add(1))?,
            };
            self.last = Some(next);
            Some(TodoId::new(next))
        }
    }
}

/// Test helpers and utilities.
pub mod helpers {
    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};
    use tickbox_core::TodoManager;
    use tickbox_core::environment::IdGenerator;

    /// Snapshot the manager as `(id, description, is_complete)` triples in
    /// listing order.
    #[must_use]
    pub fn snapshot<G: IdGenerator>(manager: &TodoManager<G>) -> Vec<(u64, String, bool)> {
        manager
            .list()
            .map(|t| (t.id.get(), t.description.clone(), t.is_complete))
            .collect()
    }

    /// Route `tracing` output through the test writer so it shows up only
    /// for failing tests. Safe to call more than once.
    pub fn init_test_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    }

    /// Shared in-memory sink for formatted log lines
    #[derive(Debug, Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a thread-local subscriber filtered by `filter` (an
    /// `EnvFilter` directive such as `"warn"`) and return `f`'s result along
    /// with everything that was logged.
    pub fn capture_logs<T>(filter: &str, f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        (result, String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;
    use tickbox_core::{TodoId, TodoManager};
    use tickbox_core::environment::IdGenerator;

    /// Short, printable todo descriptions
    pub fn description() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9 ]{0,15}"
    }

    /// One manager operation, with ids drawn from a small range so that hits
    /// and misses both happen.
    #[derive(Debug, Clone)]
    pub enum Op {
        /// `add_with_state(description, is_complete)`
        Add(String, bool),
        /// `update_state(id)`
        Toggle(u64),
        /// `edit(id, description)`
        Edit(u64, String),
        /// `delete(id)`
        Delete(u64),
    }

    impl Op {
        /// Apply this operation to `manager`
        pub fn apply<G: IdGenerator>(&self, manager: &mut TodoManager<G>) {
            match self {
                Self::Add(description, is_complete) => {
                    manager.add_with_state(description.clone(), *is_complete);
                }
                Self::Toggle(id) => {
                    manager.update_state(TodoId::new(*id));
                }
                Self::Edit(id, description) => {
                    manager.edit(TodoId::new(*id), description.clone());
                }
                Self::Delete(id) => {
                    manager.delete(TodoId::new(*id));
                }
            }
        }
    }

    /// Any single operation
    pub fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (description(), any::<bool>()).prop_map(|(d, c)| Op::Add(d, c)),
            2 => (0..12_u64).prop_map(Op::Toggle),
            1 => (0..12_u64, description()).prop_map(|(id, d)| Op::Edit(id, d)),
            2 => (0..12_u64).prop_map(Op::Delete),
        ]
    }

    /// A sequence of operations
    pub fn ops() -> impl Strategy<Value = Vec<Op>> {
        prop::collection::vec(op(), 0..40)
    }
}

// Re-export commonly used items
pub use mocks::FixedIds;
