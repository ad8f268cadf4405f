//! Bridges the classifiers to a rendering widget.
//!
//! This crate turns classifier output into highlightable spans and owns the
//! one piece of long-lived state in the pipeline: which syntax the currently
//! displayed file uses. A [`Session`] re-selects the syntax synchronously
//! whenever the file identity changes, so a stale classifier is never used
//! to highlight a different file's content. Everything else is recomputed
//! per line on every call.

mod highlighter;
mod session;

pub use highlighter::{highlight_line, Highlighter, LineSpans, Span};
pub use session::Session;
