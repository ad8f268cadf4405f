//! Span production: one classified range per classifier call.

use smallvec::SmallVec;
use tint_stream::LineStream;
use tint_syntax::{Syntax, TokenKind};

/// A classified byte range within one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset, inclusive.
    pub start: usize,
    /// End byte offset, exclusive.
    pub end: usize,
    /// Classification of the range; `None` renders unstyled.
    pub kind: Option<TokenKind>,
}

impl Span {
    /// The text this span covers within its line.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

/// Spans for one line. Most lines produce only a handful.
pub type LineSpans = SmallVec<[Span; 8]>;

/// Highlight a single line with the given syntax.
///
/// Feeds a fresh [`LineStream`] to the classifier until the line is
/// exhausted. Adjacent unclassified ranges (whitespace and fallback
/// characters) are coalesced into one span; classified tokens are kept
/// one span each.
pub fn highlight_line(syntax: Syntax, line: &str) -> LineSpans {
    let mut stream = LineStream::new(line);
    let mut spans = LineSpans::new();
    while !stream.eol() {
        let start = stream.pos();
        let kind = syntax.token(&mut stream);
        let end = stream.pos();
        debug_assert!(end > start, "classifier must consume at least one char");
        match spans.last_mut() {
            Some(prev) if prev.kind.is_none() && kind.is_none() => prev.end = end,
            _ => spans.push(Span { start, end, kind }),
        }
    }
    spans
}

/// Per-syntax highlighting configuration handed to the rendering widget.
///
/// Stateless and cheap to construct; the widget re-creates one whenever the
/// open file changes (see [`Session`](crate::Session)).
#[derive(Clone, Copy, Debug)]
pub struct Highlighter {
    syntax: Syntax,
}

impl Highlighter {
    pub fn new(syntax: Syntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Human-readable language name, for UI chrome.
    pub fn language(&self) -> &'static str {
        self.syntax.language()
    }

    /// Highlight one line.
    pub fn highlight_line(&self, line: &str) -> LineSpans {
        highlight_line(self.syntax, line)
    }

    /// Highlight a whole buffer, line by line.
    ///
    /// Lines are independent by design; nothing carries over between them.
    pub fn highlight(&self, text: &str) -> Vec<LineSpans> {
        text.lines().map(|line| self.highlight_line(line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{highlight_line, Highlighter, Span};
    use pretty_assertions::assert_eq;
    use tint_syntax::{Syntax, TokenKind};

    fn classes(syntax: Syntax, line: &str) -> Vec<(Option<&'static str>, &str)> {
        highlight_line(syntax, line)
            .iter()
            .map(|s| (s.kind.map(TokenKind::style_class), s.text(line)))
            .collect::<Vec<_>>()
    }

    #[test]
    fn comment_line_is_one_span() {
        assert_eq!(
            classes(Syntax::CFamily, "// hello world"),
            vec![(Some("comment"), "// hello world")]
        );
    }

    #[test]
    fn spans_tile_the_line() {
        let line = "int total = 5;";
        let spans = highlight_line(Syntax::Java, line);
        let mut pos = 0;
        for span in &spans {
            assert_eq!(span.start, pos);
            pos = span.end;
        }
        assert_eq!(pos, line.len());
    }

    #[test]
    fn unclassified_runs_coalesce() {
        let line = "...";
        let spans = highlight_line(Syntax::Plain, line);
        assert_eq!(
            spans.as_slice(),
            &[Span {
                start: 0,
                end: 3,
                kind: None
            }]
        );
    }

    #[test]
    fn classified_tokens_stay_separate() {
        assert_eq!(
            classes(Syntax::CFamily, "(("),
            vec![(Some("operator"), "("), (Some("operator"), "(")]
        );
    }

    #[test]
    fn empty_line_has_no_spans() {
        assert!(highlight_line(Syntax::Java, "").is_empty());
    }

    #[test]
    fn highlight_splits_buffer_into_lines() {
        let hl = Highlighter::new(Syntax::Assembly);
        let all = hl.highlight("loop:\n; done\n");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].len(), 2); // keyword + label
        assert_eq!(all[0][1].kind, Some(TokenKind::Label));
        assert_eq!(all[1][0].kind, Some(TokenKind::Comment));
    }
}
