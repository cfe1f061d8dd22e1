//! A presence/absence container for values that may be missing.
//!
//! `Optional<T>` is what lookups return when the thing asked for might not
//! exist. Its contents are private: the only ways to get at the value are
//! [`Optional::value`] and [`Optional::into_value`] (which fail on an empty
//! optional), [`Optional::value_or`] (which takes an explicit default),
//! [`Optional::map`], or an explicit conversion into [`Option`].
//!
//! # Example
//!
//! ```
//! use tickbox_core::optional::{Optional, OptionalError};
//!
//! let present = Optional::some(21);
//! assert!(present.has_value());
//! assert_eq!(present.map(|n| n * 2).value(), Ok(&42));
//!
//! let missing: Optional<i32> = Optional::none();
//! assert_eq!(missing.value(), Err(OptionalError::Empty));
//! assert_eq!(missing.value_or(7), 7);
//! ```

use thiserror::Error;

/// Error types for optional access.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    /// A value was extracted from an empty optional without checking first.
    #[error("Optional does not have a value")]
    Empty,
}

/// Either empty or holding exactly one `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// An empty optional.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// An optional wrapping `value`.
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    /// Whether a value is present.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Borrows the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::Empty`] if the optional holds nothing. Callers
    /// are expected to check [`has_value`](Self::has_value) first; hitting this
    /// error means they did not.
    pub fn value(&self) -> Result<&T, OptionalError> {
        self.0.as_ref().ok_or_else(|| {
            tracing::error!("value() called on an empty Optional");
            OptionalError::Empty
        })
    }

    /// Takes the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::Empty`] if the optional holds nothing.
    pub fn into_value(self) -> Result<T, OptionalError> {
        self.0.ok_or_else(|| {
            tracing::error!("into_value() called on an empty Optional");
            OptionalError::Empty
        })
    }

    /// Takes the wrapped value, or `default` when empty.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// Transforms the wrapped value.
    ///
    /// `transform` runs exactly once when a value is present and not at all
    /// when the optional is empty.
    #[must_use]
    pub fn map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(transform))
    }

    /// Borrows the contents as `Optional<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    /// Converts into the standard library's `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}
