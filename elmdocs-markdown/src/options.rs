//! Rendering options.
//!
//! The pipeline itself reads no configuration; callers build a
//! `RenderOptions` and pass it down.

use std::borrow::Cow;

/// How operator names (e.g. `::`) are displayed in headings, signatures and
/// indexes.
///
/// Declaration lookup and anchors always use the bare name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OperatorStyle {
    /// Render operators as written in `@docs` after sanitizing: `::`.
    #[default]
    Bare,
    /// Render operators in their prefix form: `(::)`.
    Decorated,
}

impl OperatorStyle {
    /// Returns the display form of a declaration name.
    ///
    /// Names that are not operators are returned unchanged.
    #[must_use]
    pub fn display<'a>(self, name: &'a str) -> Cow<'a, str> {
        match self {
            Self::Decorated if is_operator(name) => Cow::Owned(format!("({name})")),
            _ => Cow::Borrowed(name),
        }
    }
}

/// Returns `true` if `name` is a symbolic operator rather than an identifier.
#[must_use]
pub fn is_operator(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| !(c.is_alphanumeric() || c == '_'))
}

/// Options controlling document rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Operator display form.
    pub operator_style: OperatorStyle,
    /// Version of this tool, reported in the footer.
    pub tool_version: String,
    /// Compiler name, reported in the footer.
    pub compiler_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            operator_style: OperatorStyle::default(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            compiler_label: "elm-make".to_string(),
        }
    }
}
