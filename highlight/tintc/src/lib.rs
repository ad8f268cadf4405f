//! Terminal driver for the Tint highlighting pipeline.
//!
//! Stands in for the editor shell: reads a file, selects a syntax from its
//! name, and paints classified spans to the terminal. All actual
//! classification lives in `tint_syntax`; this crate only does I/O and ANSI.

pub mod commands;
pub mod error;
pub mod paint;

pub use error::CliError;
