//! ANSI painting of highlighted spans.

use tint_render::Highlighter;
use tint_syntax::TokenKind;

const RESET: &str = "\x1b[0m";

/// Terminal color for a token kind. Identifiers stay unstyled, matching the
/// editor's default-foreground treatment.
fn color(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Comment => Some("\x1b[90m"),
        TokenKind::String | TokenKind::CharLiteral => Some("\x1b[32m"),
        TokenKind::Number => Some("\x1b[36m"),
        TokenKind::Keyword => Some("\x1b[35m"),
        TokenKind::TypeName => Some("\x1b[33m"),
        TokenKind::Atom => Some("\x1b[36m"),
        TokenKind::Operator => Some("\x1b[37m"),
        TokenKind::Label => Some("\x1b[33m"),
        TokenKind::Ident => None,
    }
}

/// Render one line with ANSI escapes around each classified span.
pub fn paint_line(highlighter: &Highlighter, line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for span in highlighter.highlight_line(line) {
        match span.kind.and_then(color) {
            Some(code) => {
                out.push_str(code);
                out.push_str(span.text(line));
                out.push_str(RESET);
            }
            None => out.push_str(span.text(line)),
        }
    }
    out
}
