//! Assembly classifier (`.asm`, `.s`).
//!
//! Deliberately coarse: any alphabetic-leading word is reported as a keyword
//! (instructions, registers, and directives are not told apart), and a
//! trailing `:` is a label marker. Comments start with `;` or `#` and run to
//! the end of the line.

use crate::scan;
use crate::token_kind::TokenKind;
use tint_stream::LineStream;

/// Classify the next lexical unit. First matching rule wins.
pub(crate) fn token(stream: &mut LineStream<'_>) -> Option<TokenKind> {
    if stream.eat_space() {
        return None;
    }

    if matches!(stream.peek(), Some(';' | '#')) {
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

    if stream.match_with(scan::asm_number) {
        return Some(TokenKind::Number);
    }

    if stream.match_with(scan::asm_word) {
        return Some(TokenKind::Keyword);
    }

    if stream.peek() == Some(':') {
        stream.next();
        return Some(TokenKind::Label);
    }

    stream.next();
    None
}

#[cfg(test)]
mod tests {
    use super::token;
    use crate::token_kind::TokenKind;
    use pretty_assertions::assert_eq;
    use tint_stream::LineStream;

    fn tokens_of(line: &str) -> Vec<(Option<TokenKind>, &str)> {
        let mut stream = LineStream::new(line);
        let mut out = Vec::new();
        while !stream.eol() {
            let start = stream.pos();
            let kind = token(&mut stream);
            out.push((kind, &line[start..stream.pos()]));
        }
        out
    }

    #[test]
    fn label_line() {
        assert_eq!(
            tokens_of("loop:"),
            vec![
                (Some(TokenKind::Keyword), "loop"),
                (Some(TokenKind::Label), ":"),
            ]
        );
    }

    #[test]
    fn semicolon_and_hash_comments() {
        assert_eq!(
            tokens_of("; setup"),
            vec![(Some(TokenKind::Comment), "; setup")]
        );
        assert_eq!(
            tokens_of("mov r0, r1 # copy"),
            vec![
                (Some(TokenKind::Keyword), "mov"),
                (None, " "),
                (Some(TokenKind::Keyword), "r0"),
                (None, ","),
                (None, " "),
                (Some(TokenKind::Keyword), "r1"),
                (None, " "),
                (Some(TokenKind::Comment), "# copy"),
            ]
        );
    }

    #[test]
    fn words_are_keywords_without_further_classification() {
        assert_eq!(
            tokens_of("jmp .Ltarget"),
            vec![
                (Some(TokenKind::Keyword), "jmp"),
                (None, " "),
                (None, "."),
                (Some(TokenKind::Keyword), "Ltarget"),
            ]
        );
    }

    #[test]
    fn hex_and_decimal_numbers() {
        assert_eq!(
            tokens_of("add r0, 0x1F, 42"),
            vec![
                (Some(TokenKind::Keyword), "add"),
                (None, " "),
                (Some(TokenKind::Keyword), "r0"),
                (None, ","),
                (None, " "),
                (Some(TokenKind::Number), "0x1F"),
                (None, ","),
                (None, " "),
                (Some(TokenKind::Number), "42"),
            ]
        );
    }

    #[test]
    fn string_operand() {
        assert_eq!(
            tokens_of("msg db \"hi\""),
            vec![
                (Some(TokenKind::Keyword), "msg"),
                (None, " "),
                (Some(TokenKind::Keyword), "db"),
                (None, " "),
                (Some(TokenKind::String), "\"hi\""),
            ]
        );
    }

    #[test]
    fn char_literal_operand() {
        assert_eq!(
            tokens_of("cmp al, 'q'"),
            vec![
                (Some(TokenKind::Keyword), "cmp"),
                (None, " "),
                (Some(TokenKind::Keyword), "al"),
                (None, ","),
                (None, " "),
                (Some(TokenKind::CharLiteral), "'q'"),
            ]
        );
    }

    #[test]
    fn punctuation_is_unclassified() {
        assert_eq!(
            tokens_of("[bx]"),
            vec![
                (None, "["),
                (Some(TokenKind::Keyword), "bx"),
                (None, "]"),
            ]
        );
    }
}
