//! Interactive todo list built on `tickbox-core`.
//!
//! The REPL reads one command per line, applies it to an in-memory
//! [`TodoManager`](tickbox_core::TodoManager), and re-renders the list.
//! Nothing is saved when the session ends.
//!
//! # Quick Start
//!
//! ```
//! use tickbox::{Config, Repl};
//!
//! # fn example() -> Result<(), tickbox::ReplError> {
//! let input = "add Buy milk\ndone 0\nquit\n".as_bytes();
//! let mut output = Vec::new();
//!
//! let mut repl = Repl::new(Config::default());
//! repl.run(input, &mut output)?;
//!
//! assert_eq!(repl.manager().completed_count(), 1);
//! # Ok(())
//! # }
//! # example().ok();
//! ```

pub mod command;
pub mod config;
pub mod render;
pub mod repl;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use config::Config;
pub use repl::{Flow, Repl, ReplError};
