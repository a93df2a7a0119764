//! Error types for Markdown generation.

use thiserror::Error;

/// Errors that can occur during documentation rendering.
#[derive(Debug, Error)]
pub enum DocsError {
    /// An `@docs` directive names a declaration the module does not expose.
    #[error(
        "module {module} documents `{name}` but exposes no such declaration{}",
        suggestion.as_ref().map_or_else(String::new, |s| format!(" (did you mean `{s}`?)"))
    )]
    UnresolvedDirective {
        /// Module whose comment holds the directive.
        module: String,
        /// Sanitized name that failed to resolve.
        name: String,
        /// Closest declaration name, if any is near enough.
        suggestion: Option<String>,
    },
}
