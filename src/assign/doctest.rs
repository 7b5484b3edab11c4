#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Conversion of plain source lines into an interactive-transcript
//! sequence: top-level statements become prompt lines, continuations keep
//! their statement grouped with the prompt that opened it.

/// Prefix marking a statement line in a transcript.
pub const PROMPT: &str = ">>> ";

/// Prefix marking a continuation line in a transcript.
pub const CONTINUATION: &str = "... ";

/// Keywords that open a dangling clause and therefore continue the
/// enclosing statement even at zero indentation.
const DANGLING_CLAUSES: [&str; 4] = ["except:", "elif ", "else:", "finally:"];

/// Converts ordered source lines into transcript-style lines.
///
/// A line continues the previous statement when it is indented, opens a
/// dangling clause, or follows a line whose trimmed form ends with a
/// backslash; every other line starts a new prompt.
pub fn to_transcript<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for line in lines {
        let continues = line.starts_with(' ')
            || line.starts_with('\t')
            || DANGLING_CLAUSES.iter().any(|clause| line.starts_with(clause))
            || out.last().is_some_and(|prev| prev.trim().ends_with('\\'));

        let marker = if continues { CONTINUATION } else { PROMPT };
        out.push(format!("{marker}{line}"));
    }

    out
}
