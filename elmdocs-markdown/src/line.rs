//! Line classification for documentation comments.
//!
//! Every comment line falls into exactly one [`LineKind`]. The directive
//! resolver and the code-sample fencer both branch on this classification
//! instead of matching raw text.

/// Directive keyword that inlines declaration documentation.
pub const DOCS_DIRECTIVE: &str = "@docs";

/// Indentation that marks a line as part of a code sample.
pub const CODE_INDENT: &str = "    ";

/// Classification of a single comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A level-1 heading (`# Title`) written by the module author.
    Heading(&'a str),
    /// An `@docs a, b, c` directive with its sanitized names in order.
    Directives(Vec<String>),
    /// A code-sample line, with the four-space indent already removed.
    CodeSample(&'a str),
    /// Anything else, including blank lines.
    Plain(&'a str),
}

/// Classify one comment line.
///
/// Checked in order: heading, directive, code sample, plain.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if is_heading(line) {
        return LineKind::Heading(line);
    }
    if let Some(names) = parse_directive(line) {
        return LineKind::Directives(names);
    }
    code_sample(line).map_or(LineKind::Plain(line), LineKind::CodeSample)
}

/// Returns the line's code with the indent removed, if it is a code-sample
/// line: four leading spaces followed by visible content.
#[must_use]
pub fn code_sample(line: &str) -> Option<&str> {
    line.strip_prefix(CODE_INDENT).filter(|code| !is_blank(code))
}

/// Returns `true` for `# ` followed by a letter.
#[must_use]
pub fn is_heading(line: &str) -> bool {
    line.strip_prefix("# ")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Parse an `@docs` directive line into sanitized declaration names.
///
/// Returns `None` if the trimmed line is not a directive. Empty entries
/// (e.g. from a trailing comma) are skipped.
#[must_use]
pub fn parse_directive(line: &str) -> Option<Vec<String>> {
    let rest = line.trim().strip_prefix(DOCS_DIRECTIVE)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(
        rest.split(',')
            .map(sanitize_name)
            .filter(|name| !name.is_empty())
            .collect(),
    )
}

/// Sanitize a directive entry: trim whitespace and drop parentheses.
///
/// Operators are listed in prefix form (`(::)`) but keyed bare (`::`).
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    raw.trim().chars().filter(|&c| c != '(' && c != ')').collect()
}

/// Returns `true` if the line is empty or only whitespace.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
