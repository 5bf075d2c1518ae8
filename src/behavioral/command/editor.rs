//! History controller: owns the document and two stacks of commands.

use super::{Document, EditCommand};

/// Session-scoped editor with linear undo/redo history.
///
/// Executing any new command invalidates everything on the redo stack;
/// there are no branching timelines.
#[derive(Debug, Default)]
pub struct Editor {
    document: Document,
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn content(&self) -> &str {
        self.document.content()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Runs `command` against the document and records it as undoable.
    /// Any commands waiting on the redo stack become unreachable.
    pub fn execute(&mut self, mut command: EditCommand) {
        command.execute(&mut self.document);
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Reverses the most recent command, making it redoable. Returns its
    /// description, or `None` when there is nothing to undo (a reported
    /// no-op, not an error; the document is untouched).
    pub fn undo(&mut self) -> Option<String> {
        let mut command = self.undo_stack.pop()?;
        command.undo(&mut self.document);
        let label = command.description();
        self.redo_stack.push(command);
        Some(label)
    }

    /// Re-applies the most recently undone command through the same
    /// execution path as a first run. Returns its description, or `None`
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> Option<String> {
        let mut command = self.redo_stack.pop()?;
        command.execute(&mut self.document);
        let label = command.description();
        self.undo_stack.push(command);
        Some(label)
    }

    /// Executes a named sequence of commands through the ordinary `execute`
    /// path. Each sub-command lands on the undo stack individually, so the
    /// macro unwinds one step at a time rather than atomically. Returns the
    /// number of commands run.
    pub fn run_macro(&mut self, name: &str, commands: Vec<EditCommand>) -> usize {
        let _ = name; // named for the caller's narration only
        let count = commands.len();
        for command in commands {
            self.execute(command);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(content: &str) -> Editor {
        let mut editor = Editor::new();
        editor.execute(EditCommand::insert(0, content));
        editor
    }

    #[test]
    fn test_insert_roundtrip() {
        let mut editor = editor_with("Hello World");
        let before = editor.content().to_string();
        editor.execute(EditCommand::insert(5, ", there"));
        assert_eq!(editor.content(), "Hello, there World");
        editor.undo();
        assert_eq!(editor.content(), before);
    }

    #[test]
    fn test_delete_roundtrip_restores_substring() {
        let mut editor = editor_with("Hello World");
        editor.execute(EditCommand::delete(5, 11));
        assert_eq!(editor.content(), "Hello");
        editor.undo();
        assert_eq!(editor.content(), "Hello World");
    }

    #[test]
    fn test_replace_roundtrip() {
        let mut editor = editor_with("one fish two fish");
        editor.execute(EditCommand::replace("fish", "cat"));
        assert_eq!(editor.content(), "one cat two cat");
        editor.undo();
        assert_eq!(editor.content(), "one fish two fish");
    }

    #[test]
    fn test_replace_roundtrip_when_needle_absent() {
        let mut editor = editor_with("Hello");
        editor.execute(EditCommand::replace("xyz", "abc"));
        assert_eq!(editor.content(), "Hello");
        editor.undo();
        assert_eq!(editor.content(), "Hello");
    }

    #[test]
    fn test_n_undos_restore_initial_state() {
        let mut editor = Editor::new();
        editor.execute(EditCommand::insert(0, "abc"));
        editor.execute(EditCommand::insert(3, "def"));
        editor.execute(EditCommand::delete(1, 4));
        editor.execute(EditCommand::replace("f", "F"));
        while editor.undo().is_some() {}
        assert_eq!(editor.content(), "");
        assert_eq!(editor.undo_depth(), 0);
    }

    #[test]
    fn test_redo_restores_undone_state() {
        let mut editor = editor_with("Hello");
        editor.execute(EditCommand::insert(5, " World"));
        let after = editor.content().to_string();
        editor.undo();
        assert_eq!(editor.content(), "Hello");
        editor.redo();
        assert_eq!(editor.content(), after);
    }

    #[test]
    fn test_undo_on_empty_history_is_reported_noop() {
        let mut editor = Editor::new();
        assert_eq!(editor.undo(), None);
        assert_eq!(editor.content(), "");
    }

    #[test]
    fn test_redo_on_empty_history_is_reported_noop() {
        let mut editor = editor_with("x");
        assert_eq!(editor.redo(), None);
        assert_eq!(editor.content(), "x");
    }

    #[test]
    fn test_new_command_invalidates_redo() {
        let mut editor = editor_with("Hello");
        editor.execute(EditCommand::insert(5, " World"));
        editor.undo();
        assert_eq!(editor.redo_depth(), 1);
        editor.execute(EditCommand::insert(5, "!"));
        assert_eq!(editor.redo_depth(), 0);
        assert_eq!(editor.redo(), None);
        assert_eq!(editor.content(), "Hello!");
    }

    #[test]
    fn test_macro_is_undoable_per_command() {
        let mut editor = Editor::new();
        let count = editor.run_macro(
            "greet",
            vec![
                EditCommand::insert(0, "Hello"),
                EditCommand::insert(5, " World"),
            ],
        );
        assert_eq!(count, 2);
        assert_eq!(editor.content(), "Hello World");
        assert_eq!(editor.undo_depth(), 2);
        editor.undo();
        assert_eq!(editor.content(), "Hello");
    }

    #[test]
    fn test_hello_dart_scenario() {
        let mut editor = Editor::new();
        editor.execute(EditCommand::insert(0, "Hello World"));
        assert_eq!(editor.content(), "Hello World");
        editor.execute(EditCommand::insert(5, ","));
        assert_eq!(editor.content(), "Hello, World");
        editor.execute(EditCommand::replace("World", "Dart"));
        assert_eq!(editor.content(), "Hello, Dart");
        editor.undo();
        editor.undo();
        assert_eq!(editor.content(), "Hello World");
        editor.redo();
        assert_eq!(editor.content(), "Hello, World");
    }

    #[test]
    #[should_panic(expected = "never executed")]
    fn test_undo_before_execute_fails_fast() {
        let mut doc = Document::new();
        let mut command = EditCommand::delete(0, 0);
        command.undo(&mut doc);
    }

    #[test]
    #[should_panic(expected = "already executed")]
    fn test_double_execute_fails_fast() {
        let mut doc = Document::new();
        doc.insert_at(0, "abc");
        let mut command = EditCommand::delete(0, 1);
        command.execute(&mut doc);
        command.execute(&mut doc);
    }
}
