//! `elmdocs` core: docs JSON schema types
//!
//! Shared types describing the module records `elm-make --docs` writes,
//! used by the Markdown renderer and the CLI.

pub mod error;
pub mod schema;

pub use error::SchemaError;
pub use schema::{AliasDecl, ModuleRecord, UnionCase, UnionTypeDecl, ValueDecl, parse_modules};
