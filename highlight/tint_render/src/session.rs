//! Per-file highlighting session.

use crate::highlighter::{Highlighter, LineSpans};
use tint_syntax::Syntax;
use tracing::debug;

/// Tracks the currently displayed file and the syntax selected for it.
///
/// Selection is memoized on file identity: [`set_file`](Session::set_file)
/// is a no-op while the name is unchanged and re-selects synchronously the
/// moment it differs. The selected [`Highlighter`] is replaced, never
/// mutated.
#[derive(Clone, Debug)]
pub struct Session {
    file_name: String,
    highlighter: Highlighter,
}

impl Session {
    /// Open a session for `file_name`, selecting its syntax.
    pub fn new(file_name: &str) -> Self {
        let syntax = Syntax::for_file_name(file_name);
        debug!(file = %file_name, language = syntax.language(), "selected syntax");
        Self {
            file_name: file_name.to_owned(),
            highlighter: Highlighter::new(syntax),
        }
    }

    /// Switch the session to `file_name`, re-selecting the syntax if the
    /// file identity changed.
    pub fn set_file(&mut self, file_name: &str) {
        if self.file_name == file_name {
            return;
        }
        let syntax = Syntax::for_file_name(file_name);
        debug!(file = %file_name, language = syntax.language(), "selected syntax");
        self.file_name = file_name.to_owned();
        self.highlighter = Highlighter::new(syntax);
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn syntax(&self) -> Syntax {
        self.highlighter.syntax()
    }

    /// The highlighting configuration for the current file.
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Highlight one line of the current file.
    pub fn highlight_line(&self, line: &str) -> LineSpans {
        self.highlighter.highlight_line(line)
    }
}
