//! The closed strategy surface and the file-name selector.

use crate::token_kind::TokenKind;
use crate::{assembly, c_family, java, plain};
use tint_stream::LineStream;

/// One language's lexical rules.
///
/// The variant set is small and fixed, so the strategy is a tagged choice
/// with exhaustive dispatch rather than open polymorphism. Values are
/// stateless and freely reusable across files of the same language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// ECMAScript-flavored C-family rules (`.js`, `.jsx`, `.ts`, `.tsx`).
    CFamily,
    /// Java rules (`.java`).
    Java,
    /// Assembly rules (`.asm`, `.s`).
    Assembly,
    /// No classification at all; the universal fallback.
    Plain,
}

impl Syntax {
    /// Select the syntax for a file name.
    ///
    /// Pure and total: case-insensitive suffix match against a fixed,
    /// ordered table, falling through to [`Syntax::Plain`] for `.txt`,
    /// unknown suffixes, and the empty string. Only the suffix matters, so
    /// names may contain `/` or `\` separators.
    pub fn for_file_name(name: &str) -> Self {
        const C_FAMILY: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];
        const ASSEMBLY: &[&str] = &[".asm", ".s"];

        if C_FAMILY.iter().any(|suf| has_suffix_ignore_case(name, suf)) {
            Syntax::CFamily
        } else if ASSEMBLY.iter().any(|suf| has_suffix_ignore_case(name, suf)) {
            Syntax::Assembly
        } else if has_suffix_ignore_case(name, ".java") {
            Syntax::Java
        } else {
            Syntax::Plain
        }
    }

    /// Human-readable language name, for UI and diagnostics only.
    pub fn language(self) -> &'static str {
        match self {
            Syntax::CFamily => "JavaScript/TypeScript",
            Syntax::Java => "Java",
            Syntax::Assembly => "Assembly",
            Syntax::Plain => "Plain text",
        }
    }

    /// Classify the next lexical unit of `stream`.
    ///
    /// Total and always makes progress: on every call the cursor advances by
    /// at least one character, so a line of `n` characters is exhausted in at
    /// most `n` calls. `None` means the consumed span carries no
    /// classification.
    pub fn token(self, stream: &mut LineStream<'_>) -> Option<TokenKind> {
        match self {
            Syntax::CFamily => c_family::token(stream),
            Syntax::Java => java::token(stream),
            Syntax::Assembly => assembly::token(stream),
            Syntax::Plain => plain::token(stream),
        }
    }
}

/// ASCII-case-insensitive suffix test.
fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    let (name, suffix) = (name.as_bytes(), suffix.as_bytes());
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
