//! Text rendering of todos.

use std::fmt;
use tickbox_core::TodoItem;
use tickbox_core::TodoManager;
use tickbox_core::environment::IdGenerator;

/// One todo as `"<id>. <description> [x]"`, or `[ ]` when not done.
#[derive(Debug, Clone, Copy)]
pub struct TodoLine<'a>(pub &'a TodoItem);

impl fmt::Display for TodoLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.0.is_complete { 'x' } else { ' ' };
        write!(f, "{}. {} [{mark}]", self.0.id, self.0.description)
    }
}

/// The full list under a `Todos:` heading, one indented line per todo.
///
/// An empty manager renders as `No todos...` under the heading.
pub struct TodoList<'a, G>(pub &'a TodoManager<G>);

impl<G: IdGenerator> fmt::Display for TodoList<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Todos:")?;
        if self.0.is_empty() {
            return writeln!(f, "No todos...");
        }
        for todo in self.0.list() {
            writeln!(f, "  {}", TodoLine(todo))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickbox_core::TodoId;

    #[test]
    fn line_marks_completion() {
        let open = TodoItem::new(TodoId::new(0), "Buy milk".to_string(), false);
        let done = TodoItem::new(TodoId::new(12), "Walk dog".to_string(), true);

        assert_eq!(TodoLine(&open).to_string(), "0. Buy milk [ ]");
        assert_eq!(TodoLine(&done).to_string(), "12. Walk dog [x]");
    }

    #[test]
    fn empty_list_says_so() {
        let manager = TodoManager::new();
        assert_eq!(TodoList(&manager).to_string(), "Todos:\nNo todos...\n");
    }

    #[test]
    fn list_renders_in_id_order() {
        let mut manager = TodoManager::new();
        manager.add("A");
        manager.add_with_state("B", true);

        assert_eq!(
            TodoList(&manager).to_string(),
            "Todos:\n  0. A [ ]\n  1. B [x]\n"
        );
    }
}
