//! The shared, language-agnostic token vocabulary.

/// Classification attached to a consumed span of characters.
///
/// The set is closed: every classifier maps its own grammar into these ten
/// kinds. "No classification" is expressed as `Option::<TokenKind>::None` by
/// the classifier entry points, not as a variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Line comment, from its marker to the end of the line.
    Comment,
    /// String literal, taken verbatim; unterminated strings still classify
    /// as a string up to the end of the line.
    String,
    /// Single-quoted character literal (Java and assembly only).
    CharLiteral,
    /// Numeric literal, including language-specific radix prefixes,
    /// exponents, and type suffixes.
    Number,
    /// Reserved word of the language.
    Keyword,
    /// Primitive type name (Java only).
    TypeName,
    /// Literal atom such as `true`, `false`, `null`, `undefined`.
    Atom,
    /// Any other word: variables, class names, instruction operands.
    Ident,
    /// Operator or punctuation run, one to three characters.
    Operator,
    /// Assembly label marker (a trailing `:`).
    Label,
}

impl TokenKind {
    /// Stable style-class name for renderers, in the vocabulary highlighting
    /// themes key on.
    pub fn style_class(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::CharLiteral => "char-literal",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::TypeName => "type-name",
            TokenKind::Atom => "literal-atom",
            TokenKind::Ident => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Label => "label",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TokenKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn style_classes_are_distinct() {
        let all = [
            TokenKind::Comment,
            TokenKind::String,
            TokenKind::CharLiteral,
            TokenKind::Number,
            TokenKind::Keyword,
            TokenKind::TypeName,
            TokenKind::Atom,
            TokenKind::Ident,
            TokenKind::Operator,
            TokenKind::Label,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.style_class(), b.style_class());
            }
        }
        assert_eq!(TokenKind::CharLiteral.style_class(), "char-literal");
    }
}
