//! The read-eval-print loop.
//!
//! Each turn renders the whole list, prints the prompt, reads one line and
//! dispatches it to the manager. Bad input, including bytes that are not
//! UTF-8, is reported and the loop carries on; only I/O failures end it early.

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::render::{TodoLine, TodoList};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tickbox_core::environment::{IdGenerator, SequentialIds};
use tickbox_core::{TodoId, TodoManager};

/// Error types for the REPL.
#[derive(Error, Debug)]
pub enum ReplError {
    /// Reading input or writing output failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Whether the loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read another line
    Continue,
    /// Leave the loop
    Quit,
}

/// Interactive session over a [`TodoManager`].
#[derive(Debug)]
pub struct Repl<G = SequentialIds> {
    manager: TodoManager<G>,
    config: Config,
}

impl Repl<SequentialIds> {
    /// Creates a session with an empty list numbered from `config.first_id`
    #[must_use]
    pub fn new(config: Config) -> Self {
        let manager = TodoManager::with_ids(SequentialIds::starting_at(config.first_id));
        Self { manager, config }
    }
}

impl<G: IdGenerator> Repl<G> {
    /// Creates a session around an existing manager
    #[must_use]
    pub const fn with_manager(manager: TodoManager<G>, config: Config) -> Self {
        Self { manager, config }
    }

    /// The todos managed by this session
    #[must_use]
    pub const fn manager(&self) -> &TodoManager<G> {
        &self.manager
    }

    /// Runs the loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Io`] if reading `input` or writing `output` fails.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<(), ReplError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", self.config.banner)?;
        if self.config.show_help {
            writeln!(output, "{HELP}")?;
        }

        let mut raw = Vec::new();
        loop {
            write!(output, "{}", TodoList(&self.manager))?;
            writeln!(output)?;
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            raw.clear();
            if input.read_until(b'\n', &mut raw)? == 0 {
                tracing::debug!("End of input");
                writeln!(output)?;
                break;
            }
            let line = String::from_utf8_lossy(&raw);

            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, &mut output)?,
                Err(error) => {
                    tracing::debug!(input = line.trim(), %error, "Rejected input");
                    writeln!(output, "{error}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(output, "Bye!")?;
        Ok(())
    }

    /// Applies one command, writing any feedback to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Io`] if writing feedback fails.
    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        output: &mut W,
    ) -> Result<Flow, ReplError> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Add {
                description,
                is_complete,
            } => {
                self.manager.add_with_state(description, is_complete);
            }
            Command::Toggle(id) => {
                if !self.manager.update_state(id) {
                    not_found(output, id)?;
                }
            }
            Command::Edit { id, description } => {
                if !self.manager.edit(id, description) {
                    not_found(output, id)?;
                }
            }
            Command::Delete(id) => {
                if !self.manager.delete(id) {
                    not_found(output, id)?;
                }
            }
            Command::Show(id) => {
                let line = self.manager.get(id).map(|todo| TodoLine(todo).to_string());
                if line.has_value() {
                    writeln!(output, "{}", line.value_or(String::new()))?;
                } else {
                    not_found(output, id)?;
                }
            }
            Command::List => {}
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

fn not_found<W: Write>(output: &mut W, id: TodoId) -> io::Result<()> {
    writeln!(output, "No todo with id {id}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests can unwrap
mod tests {
    use super::*;

    fn execute(repl: &mut Repl, line: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let command: Command = line.parse().unwrap();
        let flow = repl.execute(command, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn add_then_show() {
        let mut repl = Repl::new(Config::default());

        assert_eq!(execute(&mut repl, "add Buy milk"), (Flow::Continue, String::new()));
        assert_eq!(
            execute(&mut repl, "show 0"),
            (Flow::Continue, "0. Buy milk [ ]\n".to_string())
        );
    }

    #[test]
    fn duplicate_add_is_silent() {
        let mut repl = Repl::new(Config::default());

        execute(&mut repl, "add A");
        let (_, out) = execute(&mut repl, "add A");

        assert!(out.is_empty());
        assert_eq!(repl.manager().len(), 1);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut repl = Repl::new(Config::default());

        for line in ["done 3", "edit 3 x", "del 3", "show 3"] {
            let (flow, out) = execute(&mut repl, line);
            assert_eq!(flow, Flow::Continue);
            assert_eq!(out, "No todo with id 3\n");
        }
        assert!(repl.manager().is_empty());
    }

    #[test]
    fn quit_stops() {
        let mut repl = Repl::new(Config::default());
        assert_eq!(execute(&mut repl, "quit").0, Flow::Quit);
    }

    #[test]
    fn first_id_comes_from_config() {
        let config = Config {
            first_id: 100,
            ..Config::default()
        };
        let mut repl = Repl::new(config);

        execute(&mut repl, "add A");

        assert!(repl.manager().get(TodoId::new(100)).has_value());
    }
}
