//! Subcommand implementations.

use crate::error::CliError;
use crate::paint;
use std::fmt::Write as _;
use std::path::Path;
use tint_render::Session;
use tint_syntax::Syntax;
use tracing::debug;

fn read(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: Path::new(path).to_path_buf(),
        source,
    })
}

/// `tint highlight <file>` — paint the file to stdout with ANSI colors.
pub fn highlight_file(path: &str) -> Result<(), CliError> {
    let text = read(path)?;
    let session = Session::new(path);
    debug!(language = session.highlighter().language(), "highlighting");
    for line in text.lines() {
        println!("{}", paint::paint_line(session.highlighter(), line));
    }
    Ok(())
}

/// `tint lang <file>` — print the language selected for the file name.
///
/// Selection is a pure function of the name, so no file access happens.
pub fn show_language(path: &str) {
    println!("{}", Syntax::for_file_name(path).language());
}

/// `tint tokens <file>` — dump the classified token stream, one row per
/// classifier call that produced a classification.
pub fn dump_tokens(path: &str) -> Result<(), CliError> {
    let text = read(path)?;
    let session = Session::new(path);
    print!("{}", render_tokens(&session, &text));
    Ok(())
}

/// Table of `line  style-class  text` rows for every classified span.
pub fn render_tokens(session: &Session, text: &str) -> String {
    let mut out = String::new();
    for (idx, line) in text.lines().enumerate() {
        for span in session.highlight_line(line) {
            let Some(kind) = span.kind else { continue };
            let _ = writeln!(
                out,
                "{:>4}  {:<12} {:?}",
                idx + 1,
                kind.style_class(),
                span.text(line),
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_tokens;
    use pretty_assertions::assert_eq;
    use tint_render::Session;

    #[test]
    fn token_dump_rows_carry_line_numbers_and_classes() {
        let session = Session::new("Main.java");
        let out = render_tokens(&session, "int x;\n// done\n");
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(
            rows,
            vec![
                "   1  type-name    \"int\"",
                "   1  identifier   \"x\"",
                "   1  operator     \";\"",
                "   2  comment      \"// done\"",
            ]
        );
    }

    #[test]
    fn unclassified_spans_are_omitted_from_the_dump() {
        let session = Session::new("notes.txt");
        assert_eq!(render_tokens(&session, "nothing here\n"), "");
    }
}
