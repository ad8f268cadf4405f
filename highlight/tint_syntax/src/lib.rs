//! Per-language token classification for the Tint editor.
//!
//! Each supported language is an ordered decision chain over a
//! [`LineStream`](tint_stream::LineStream): the first rule that matches wins
//! and the consumed span is reported as one [`TokenKind`] (or no
//! classification). Classification is total — unrecognized input falls
//! through to a single-character consume — so a line of `n` characters is
//! always fully classified in at most `n` calls.
//!
//! Lexing is strictly line-local: no state crosses a line boundary, which
//! keeps classifiers stateless and reusable but means multi-line constructs
//! (block comments, template literals, multi-line strings) are not
//! recognized.
//!
//! The language set is closed, so the strategy surface is the [`Syntax`]
//! enum rather than trait objects: selection stays a pure data mapping and
//! dispatch is an exhaustive match.

mod assembly;
mod c_family;
mod java;
mod plain;
mod scan;
mod syntax;
mod token_kind;

pub use syntax::Syntax;
pub use token_kind::TokenKind;
