//! Anchored recognizers shared by the classifiers.
//!
//! Each function inspects the unconsumed remainder of a line and returns the
//! byte length of the lexeme anchored at its start, or `None`. All
//! recognizers run in a single left-to-right pass with no backtracking, so
//! per-character cost stays bounded. Every reported length covers only ASCII
//! bytes and therefore lands on a UTF-8 character boundary.

use tint_stream::LineStream;

/// Characters that form multi-character operator runs (`===`, `+=`, `<<`).
const OPERATOR_RUN: &[u8] = b"+-*/%&|^!~=<>?";

fn count_while(b: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    b.iter().take_while(|&&c| pred(c)).count()
}

/// Word lexeme for the C-family and Java grammars:
/// `[A-Za-z_$][A-Za-z0-9_$]*`.
pub(crate) fn word(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let first = *b.first()?;
    if !(first.is_ascii_alphabetic() || first == b'_' || first == b'$') {
        return None;
    }
    Some(count_while(b, |c| {
        c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
    }))
}

/// Word lexeme for assembly: `[A-Za-z_][A-Za-z0-9_.]*`.
///
/// Covers instructions, registers, and directive names alike; the assembly
/// classifier does not distinguish them further.
pub(crate) fn asm_word(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let first = *b.first()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    Some(count_while(b, |c| {
        c.is_ascii_alphanumeric() || c == b'_' || c == b'.'
    }))
}

/// `0x`/`0X` hex literal with at least one hex digit.
fn hex_number(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.len() < 3 || b[0] != b'0' || !matches!(b[1], b'x' | b'X') {
        return None;
    }
    let digits = count_while(&b[2..], |c| c.is_ascii_hexdigit());
    (digits > 0).then_some(2 + digits)
}

/// `0b`/`0B` binary literal with at least one binary digit.
fn binary_number(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.len() < 3 || b[0] != b'0' || !matches!(b[1], b'b' | b'B') {
        return None;
    }
    let digits = count_while(&b[2..], |c| matches!(c, b'0' | b'1'));
    (digits > 0).then_some(2 + digits)
}

/// Java octal literal: `0` followed by at least one octal digit.
fn octal_number(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.first() != Some(&b'0') {
        return None;
    }
    let digits = count_while(&b[1..], |c| matches!(c, b'0'..=b'7'));
    (digits > 0).then_some(1 + digits)
}

/// Decimal literal with optional fraction and exponent:
/// `\d*\.?\d+(e[+-]?\d+)?`, exponent marker case-insensitive.
///
/// The fraction and exponent are only consumed when complete ("1." lexes as
/// the number "1" with the dot left behind; "1e" leaves "e" behind).
fn decimal_number(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let int_digits = count_while(b, |c| c.is_ascii_digit());
    let mut end = int_digits;
    if b.get(end) == Some(&b'.') {
        let frac_digits = count_while(&b[end + 1..], |c| c.is_ascii_digit());
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if end == 0 {
        return None;
    }
    if matches!(b.get(end), Some(&(b'e' | b'E'))) {
        let mut j = end + 1;
        if matches!(b.get(j), Some(&(b'+' | b'-'))) {
            j += 1;
        }
        let exp_digits = count_while(&b[j..], |c| c.is_ascii_digit());
        if exp_digits > 0 {
            end = j + exp_digits;
        }
    }
    Some(end)
}

/// C-family/ECMAScript numeric literal: hex, binary, or decimal.
pub(crate) fn js_number(s: &str) -> Option<usize> {
    hex_number(s)
        .or_else(|| binary_number(s))
        .or_else(|| decimal_number(s))
}

/// Java numeric literal: hex, octal, or decimal, with an optional
/// `l`/`L`/`f`/`F` type suffix.
pub(crate) fn java_number(s: &str) -> Option<usize> {
    let base = hex_number(s)
        .or_else(|| octal_number(s))
        .or_else(|| decimal_number(s))?;
    let suffixed = matches!(s.as_bytes().get(base), Some(&(b'l' | b'L' | b'f' | b'F')));
    Some(if suffixed { base + 1 } else { base })
}

/// Assembly numeric literal: lowercase-prefixed `0x` hex or a plain
/// decimal integer. No fractions, exponents, or suffixes.
pub(crate) fn asm_number(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    if b.starts_with(b"0x") {
        let digits = count_while(&b[2..], |c| c.is_ascii_hexdigit());
        if digits > 0 {
            return Some(2 + digits);
        }
    }
    let digits = count_while(b, |c| c.is_ascii_digit());
    (digits > 0).then_some(digits)
}

fn operator_with(s: &str, punctuation: &[u8]) -> Option<usize> {
    let b = s.as_bytes();
    let first = *b.first()?;
    if OPERATOR_RUN.contains(&first) {
        let run = b
            .iter()
            .take(3)
            .take_while(|c| OPERATOR_RUN.contains(c))
            .count();
        return Some(run);
    }
    punctuation.contains(&first).then_some(1)
}

/// C-family operator/punctuation: a 1-3 character operator run or a single
/// bracket/separator.
pub(crate) fn js_operator(s: &str) -> Option<usize> {
    operator_with(s, b"[]{}();,.:")
}

/// Java operator/punctuation: as C-family, plus `@` for annotations.
pub(crate) fn java_operator(s: &str) -> Option<usize> {
    operator_with(s, b"[]{}();,.:@")
}

/// Consume string-body characters verbatim until `delim` or end of line.
///
/// No escape processing: a backslash is just another character. Reaching end
/// of line without the delimiter is fine — the caller still reports the span
/// as a string.
pub(crate) fn eat_until_delim(stream: &mut LineStream<'_>, delim: char) {
    while !stream.eol() {
        if stream.next() == Some(delim) {
            break;
        }
    }
}

/// Lenient single-quote character-literal body: an optional escape marker,
/// the character, then the closing quote, without ever verifying a closing
/// quote exists. Malformed content silently consumes up to three characters;
/// at end of line the remaining reads are no-ops.
pub(crate) fn eat_char_literal(stream: &mut LineStream<'_>) {
    stream.eat('\\');
    stream.next();
    stream.next();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_accepts_dollar_and_digits() {
        assert_eq!(word("$el_1 rest"), Some(5));
        assert_eq!(word("_x"), Some(2));
        assert_eq!(word("9abc"), None);
    }

    #[test]
    fn asm_word_accepts_dots_but_not_dollar() {
        assert_eq!(asm_word(".data"), None);
        assert_eq!(asm_word("mov.w r0"), Some(5));
        assert_eq!(asm_word("$1"), None);
    }

    #[test]
    fn hex_requires_digits() {
        assert_eq!(hex_number("0x1F"), Some(4));
        assert_eq!(hex_number("0Xff"), Some(4));
        assert_eq!(hex_number("0x"), None);
    }

    #[test]
    fn binary_requires_digits() {
        assert_eq!(binary_number("0b1010"), Some(6));
        assert_eq!(binary_number("0b2"), None);
    }

    #[test]
    fn octal_requires_octal_digits() {
        assert_eq!(octal_number("0777"), Some(4));
        assert_eq!(octal_number("09"), None);
        assert_eq!(octal_number("0"), None);
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(decimal_number("42"), Some(2));
        assert_eq!(decimal_number(".5"), Some(2));
        assert_eq!(decimal_number("3.14"), Some(4));
        assert_eq!(decimal_number("1e10"), Some(4));
        assert_eq!(decimal_number("2.5E-3"), Some(6));
        assert_eq!(decimal_number("x"), None);
    }

    #[test]
    fn decimal_leaves_incomplete_tails() {
        // trailing dot is not part of the number
        assert_eq!(decimal_number("1."), Some(1));
        // exponent without digits is not consumed
        assert_eq!(decimal_number("1e"), Some(1));
        assert_eq!(decimal_number("1e+"), Some(1));
        // a bare dot is not a number
        assert_eq!(decimal_number("."), None);
    }

    #[test]
    fn js_number_prefers_radix_prefixes() {
        assert_eq!(js_number("0x10"), Some(4));
        assert_eq!(js_number("0b11"), Some(4));
        // failed hex prefix degrades to the decimal "0"
        assert_eq!(js_number("0x"), Some(1));
    }

    #[test]
    fn java_number_suffixes() {
        assert_eq!(java_number("10L"), Some(3));
        assert_eq!(java_number("2.5f"), Some(4));
        assert_eq!(java_number("0xFFl"), Some(5));
        assert_eq!(java_number("0777"), Some(4));
        // suffix alone is not a number
        assert_eq!(java_number("L"), None);
    }

    #[test]
    fn asm_number_is_integer_only() {
        assert_eq!(asm_number("0xdead"), Some(6));
        assert_eq!(asm_number("123"), Some(3));
        assert_eq!(asm_number("3.14"), Some(1));
        // uppercase prefix is not hex in this grammar
        assert_eq!(asm_number("0X1F"), Some(1));
    }

    #[test]
    fn operator_runs_cap_at_three() {
        assert_eq!(js_operator("===x"), Some(3));
        assert_eq!(js_operator("===="), Some(3));
        assert_eq!(js_operator("+="), Some(2));
        assert_eq!(js_operator("{"), Some(1));
        assert_eq!(js_operator("@"), None);
        assert_eq!(java_operator("@Override"), Some(1));
    }
}
