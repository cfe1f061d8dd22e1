//! The REPL command grammar.
//!
//! One command per line. The first word picks the command (case-insensitive),
//! the rest of the line is its argument.
//!
//! | input                     | command                    |
//! |---------------------------|----------------------------|
//! | `add <text>`              | [`Command::Add`]           |
//! | `add! <text>`             | [`Command::Add`], complete |
//! | `done <id>`, `toggle <id>`| [`Command::Toggle`]        |
//! | `edit <id> <text>`        | [`Command::Edit`]          |
//! | `del <id>`, `rm <id>`, `delete <id>` | [`Command::Delete`] |
//! | `show <id>`               | [`Command::Show`]          |
//! | `list`, empty line        | [`Command::List`]          |
//! | `help`                    | [`Command::Help`]          |
//! | `quit`, `exit`            | [`Command::Quit`]          |

use std::str::FromStr;
use thiserror::Error;
use tickbox_core::TodoId;

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  add <text>         add a todo
  add! <text>        add a todo that is already done
  done <id>          toggle a todo between done and not done
  edit <id> <text>   change a todo's description
  del <id>           delete a todo
  show <id>          show a single todo
  list               show all todos
  help               show this help
  quit               leave";

/// Error types for command parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("Unknown command `{0}`. Type `help` for a list of commands.")]
    Unknown(String),

    /// The command needs text after it.
    #[error("`{0}` needs a description")]
    MissingDescription(&'static str),

    /// The command needs a todo id after it.
    #[error("`{0}` needs a todo id")]
    MissingId(&'static str),

    /// The id argument is not a non-negative integer.
    #[error("`{0}` is not a todo id")]
    InvalidId(String),
}

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a todo
    Add {
        /// What needs doing
        description: String,
        /// Whether it starts out done
        is_complete: bool,
    },
    /// Toggle a todo's completion flag
    Toggle(TodoId),
    /// Replace a todo's description
    Edit {
        /// Todo to edit
        id: TodoId,
        /// New description
        description: String,
    },
    /// Delete a todo
    Delete(TodoId),
    /// Print a single todo
    Show(TodoId),
    /// Re-render the list
    List,
    /// Print the command summary
    Help,
    /// Leave the loop
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_lowercase().as_str() {
            "" | "list" | "ls" => Ok(Self::List),
            "add" => Ok(Self::Add {
                description: description("add", rest)?,
                is_complete: false,
            }),
            "add!" => Ok(Self::Add {
                description: description("add!", rest)?,
                is_complete: true,
            }),
            "done" | "toggle" => Ok(Self::Toggle(id("done", rest)?)),
            "edit" => {
                let (raw_id, text) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                Ok(Self::Edit {
                    id: id("edit", raw_id)?,
                    description: description("edit", text)?,
                })
            }
            "del" | "rm" | "delete" => Ok(Self::Delete(id("del", rest)?)),
            "show" => Ok(Self::Show(id("show", rest)?)),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn description(command: &'static str, text: &str) -> Result<String, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::MissingDescription(command));
    }
    Ok(text.to_string())
}

fn id(command: &'static str, raw: &str) -> Result<TodoId, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
