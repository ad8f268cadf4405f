//! C-family/ECMAScript classifier (`.js`, `.jsx`, `.ts`, `.tsx`).
//!
//! Line comments only; strings take either quote and are closed only by the
//! same quote; numbers cover hex (`0x`), binary (`0b`), and decimal with
//! fraction/exponent. Template literals and block comments are outside the
//! line-local design.

use crate::scan;
use crate::token_kind::TokenKind;
use tint_stream::LineStream;

/// Classify the next lexical unit. First matching rule wins; the rule order
/// is part of the observable contract.
pub(crate) fn token(stream: &mut LineStream<'_>) -> Option<TokenKind> {
    if stream.eat_space() {
        return None;
    }

    if stream.match_str("//") {
        stream.skip_to_end();
        return Some(TokenKind::Comment);
    }

    // Each quote is closed only by its own kind; an unterminated string
    // still classifies as a string up to the end of the line.
    if stream.eat('"') {
        scan::eat_until_delim(stream, '"');
        return Some(TokenKind::String);
    }
    if stream.eat('\'') {
        scan::eat_until_delim(stream, '\'');
        return Some(TokenKind::String);
    }

    if stream.match_with(scan::js_number) {
        return Some(TokenKind::Number);
    }

    if stream.match_with(scan::word) {
        return Some(classify_word(stream.current()));
    }

    if stream.match_with(scan::js_operator) {
        return Some(TokenKind::Operator);
    }

    stream.next();
    None
}

/// Keyword/atom lookup, length-bucketed for fast rejection.
fn classify_word(text: &str) -> TokenKind {
    match text.len() {
        2 => match text {
            "if" => TokenKind::Keyword,
            _ => TokenKind::Ident,
        },
        3 => match text {
            "var" | "let" | "for" | "new" => TokenKind::Keyword,
            _ => TokenKind::Ident,
        },
        4 => match text {
            "else" | "this" => TokenKind::Keyword,
            "true" | "null" => TokenKind::Atom,
            _ => TokenKind::Ident,
        },
        5 => match text {
            "const" | "while" | "class" | "await" | "async" => TokenKind::Keyword,
            "false" => TokenKind::Atom,
            _ => TokenKind::Ident,
        },
        6 => match text {
            "return" | "import" | "export" => TokenKind::Keyword,
            _ => TokenKind::Ident,
        },
        8 => match text {
            "function" => TokenKind::Keyword,
            _ => TokenKind::Ident,
        },
        9 => match text {
            "undefined" => TokenKind::Atom,
            _ => TokenKind::Ident,
        },
        _ => TokenKind::Ident,
    }
}
