//! `elmdocs` Markdown: API reference generation from module records
//!
//! Renders the compiler's module records into a single Markdown document:
//! declaration blocks stitched into module prose via `@docs` directives,
//! per-module indexes, a top-level table of contents and a footer.

pub mod anchor;
pub mod declaration;
pub mod directive;
pub mod document;
pub mod error;
pub mod line;
pub mod module;
pub mod options;

pub use anchor::AnchorRegistry;
pub use document::{DocumentBuilder, build_document};
pub use error::DocsError;
pub use options::{OperatorStyle, RenderOptions};
