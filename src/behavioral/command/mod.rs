//! Command pattern: reversible edits over a text [`Document`], driven by an
//! [`Editor`] that keeps linear undo/redo history.
//!
//! Each variant of [`EditCommand`] captures whatever it needs at execution
//! time to exactly reverse itself later. Dispatch is a tagged union rather
//! than boxed trait objects; the variants are closed and each carries a
//! different reversal payload.

pub mod document;
pub mod editor;

pub use document::Document;
pub use editor::Editor;

use crossterm::style::Stylize;

/// A reversible edit. `Delete` and `Replace` are stateful: they capture
/// their reversal payload during `execute` and give it back during `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Insert {
        position: usize,
        text: String,
    },
    Delete {
        start: usize,
        end: usize,
        /// Deleted text, captured immediately before the deletion.
        removed: Option<String>,
    },
    Replace {
        from: String,
        to: String,
        /// Full pre-replace content. A whole-document checkpoint is fine at
        /// demo scale; a diff would be the scalable substitute.
        snapshot: Option<String>,
    },
}

impl EditCommand {
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self::Insert {
            position,
            text: text.into(),
        }
    }

    pub fn delete(start: usize, end: usize) -> Self {
        Self::Delete {
            start,
            end,
            removed: None,
        }
    }

    pub fn replace(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Replace {
            from: from.into(),
            to: to.into(),
            snapshot: None,
        }
    }

    /// Human-readable label, independent of execution state.
    pub fn description(&self) -> String {
        match self {
            Self::Insert { position, text } => {
                format!("insert {:?} at {}", text, position)
            }
            Self::Delete { start, end, .. } => {
                format!("delete [{}, {})", start, end)
            }
            Self::Replace { from, to, .. } => {
                format!("replace {:?} with {:?}", from, to)
            }
        }
    }

    /// Applies the edit, capturing reversal state first where needed.
    ///
    /// # Panics
    ///
    /// Panics if a stateful variant is executed twice without an undo in
    /// between; re-executing would overwrite the captured reversal payload.
    pub fn execute(&mut self, doc: &mut Document) {
        match self {
            Self::Insert { position, text } => {
                doc.insert_at(*position, text);
            }
            Self::Delete {
                start,
                end,
                removed,
            } => {
                assert!(
                    removed.is_none(),
                    "delete command already executed; undo it before re-executing"
                );
                // Capture strictly before the deletion destroys the text.
                *removed = Some(doc.slice(*start, *end));
                doc.delete_range(*start, *end);
            }
            Self::Replace { from, to, snapshot } => {
                assert!(
                    snapshot.is_none(),
                    "replace command already executed; undo it before re-executing"
                );
                *snapshot = Some(doc.content().to_string());
                doc.replace_all(from, to);
            }
        }
    }

    /// Exactly reverses the effect of the matching `execute`.
    ///
    /// # Panics
    ///
    /// Panics if a stateful variant is undone without having been executed:
    /// there is no captured payload to restore from.
    pub fn undo(&mut self, doc: &mut Document) {
        match self {
            Self::Insert { position, text } => {
                doc.delete_range(*position, *position + text.chars().count());
            }
            Self::Delete { start, removed, .. } => {
                let text = removed
                    .take()
                    .expect("undo called on a delete command that was never executed");
                doc.insert_at(*start, &text);
            }
            Self::Replace { snapshot, .. } => {
                let prior = snapshot
                    .take()
                    .expect("undo called on a replace command that was never executed");
                doc.clear();
                doc.insert_at(0, &prior);
            }
        }
    }
}

pub fn demo() {
    let mut editor = Editor::new();

    println!("Typing into an empty document, one command at a time:");
    for command in [
        EditCommand::insert(0, "Hello World"),
        EditCommand::insert(5, ","),
        EditCommand::replace("World", "Dart"),
    ] {
        let label = command.description();
        editor.execute(command);
        println!("  {} {:?}", label.dark_grey(), editor.content());
    }

    println!("Undoing twice:");
    for _ in 0..2 {
        match editor.undo() {
            Some(label) => println!("  undid {} {:?}", label.dark_grey(), editor.content()),
            None => println!("  nothing to undo"),
        }
    }

    println!("Redoing once:");
    if let Some(label) = editor.redo() {
        println!("  redid {} {:?}", label.dark_grey(), editor.content());
    }

    println!("A macro runs through the same path, one undo step per edit:");
    let len = editor.document().len();
    let count = editor.run_macro(
        "sign-off",
        vec![
            EditCommand::insert(len, "!"),
            EditCommand::replace("Hello", "Goodbye"),
        ],
    );
    println!(
        "  ran {} commands of macro 'sign-off' {:?}",
        count,
        editor.content()
    );

    println!("Unwinding everything:");
    while editor.undo().is_some() {}
    println!(
        "  history exhausted, document is {:?} ({} commands redoable)",
        editor.content(),
        editor.redo_depth()
    );
}
