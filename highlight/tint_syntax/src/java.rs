//! Java classifier (`.java`).
//!
//! Adds char literals and the primitive-type word class on top of the
//! C-family shape; strings are double-quoted only; numbers allow octal
//! (`0`-prefixed) and the `l`/`L`/`f`/`F` type suffixes. Javadoc and block
//! comments are outside the line-local design.

use crate::scan;
use crate::token_kind::TokenKind;
use tint_stream::LineStream;

/// Classify the next lexical unit. First matching rule wins.
pub(crate) fn token(stream: &mut LineStream<'_>) -> Option<TokenKind> {
    if stream.eat_space() {
        return None;
    }

    if stream.match_str("//") {
        stream.skip_to_end();
        return Some(TokenKind::Comment);
    }

    if stream.eat('"') {
        scan::eat_until_delim(stream, '"');
        return Some(TokenKind::String);
    }

    // Lenient by design: no check that a closing quote follows.
    if stream.eat('\'') {
        scan::eat_char_literal(stream);
        return Some(TokenKind::CharLiteral);
    }

    if stream.match_with(scan::java_number) {
        return Some(TokenKind::Number);
    }

    if stream.match_with(scan::word) {
        return Some(classify_word(stream.current()));
    }

    if stream.match_with(scan::java_operator) {
        return Some(TokenKind::Operator);
    }

    stream.next();
    None
}

/// Keyword/primitive/atom lookup, length-bucketed for fast rejection.
/// The three sets are disjoint and checked in keyword -> type -> atom order.
fn classify_word(text: &str) -> TokenKind {
    match text.len() {
        2 => match text {
            "if" | "do" => TokenKind::Keyword,
            _ => TokenKind::Ident,
        },
        3 => match text {
            "for" | "new" | "try" => TokenKind::Keyword,
            "int" => TokenKind::TypeName,
            _ => TokenKind::Ident,
        },
        4 => match text {
            "else" | "this" | "void" | "enum" => TokenKind::Keyword,
            "byte" | "char" | "long" => TokenKind::TypeName,
            "true" | "null" => TokenKind::Atom,
            _ => TokenKind::Ident,
        },
        5 => match text {
            "class" | "final" | "while" | "throw" | "super" | "catch" => TokenKind::Keyword,
            "short" | "float" => TokenKind::TypeName,
            "false" => TokenKind::Atom,
            _ => TokenKind::Ident,
        },
        6 => match text {
            "public" | "static" | "return" | "import" | "throws" | "record" => TokenKind::Keyword,
            "double" => TokenKind::TypeName,
            _ => TokenKind::Ident,
        },
        7 => match text {
            "private" | "finally" | "package" => TokenKind::Keyword,
            "boolean" => TokenKind::TypeName,
            _ => TokenKind::Ident,
        },
        8 => match text {
            "abstract" => TokenKind::Keyword,
            _ => TokenKind::Ident,
        },
        9 => match text {
            "protected" | "interface" => TokenKind::Keyword,
            _ => TokenKind::Ident,
        },
        10 => match text {
            "instanceof" => TokenKind::Keyword,
            _ => TokenKind::Ident,
        },
        _ => TokenKind::Ident,
    }
}
