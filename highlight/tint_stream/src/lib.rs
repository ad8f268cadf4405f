//! Single-line character stream for syntax classifiers.
//!
//! A [`LineStream`] is created fresh for each line of source text and
//! discarded once the line is exhausted. Classifiers read from it through a
//! small primitive set (`eat`, `peek`, `next`, anchored matching) and never
//! see more than one line — no lexical state crosses a line boundary.

mod line_stream;

pub use line_stream::LineStream;
