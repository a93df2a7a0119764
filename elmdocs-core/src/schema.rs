//! Docs JSON schema types
//!
//! This module defines the records `elm-make --docs` writes for each
//! exposed module. They are deserialized from the compiler's JSON output
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// ============================================================================
// Module Records
// ============================================================================

/// The compiler's description of one module's public surface.
///
/// Declaration names are unique across `aliases`, `types` and `values`
/// within one record; the same name may appear in several records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Dotted module name, e.g. `Json.Decode`.
    pub name: String,

    /// Module documentation comment, including `@docs` directives.
    #[serde(default)]
    pub comment: String,

    /// Type alias declarations in source order.
    #[serde(default)]
    pub aliases: Vec<AliasDecl>,

    /// Union type declarations in source order.
    #[serde(default)]
    pub types: Vec<UnionTypeDecl>,

    /// Value declarations (functions, constants, operators) in source order.
    #[serde(default)]
    pub values: Vec<ValueDecl>,

    /// Compiler version that produced this record.
    #[serde(
        default,
        rename = "generated-with-elm-version",
        skip_serializing_if = "Option::is_none"
    )]
    pub generated_with_elm_version: Option<String>,
}

impl ModuleRecord {
    /// Returns the names of every declaration in the record, aliases first,
    /// then union types, then values.
    pub fn declaration_names(&self) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .map(|a| a.name.as_str())
            .chain(self.types.iter().map(|t| t.name.as_str()))
            .chain(self.values.iter().map(|v| v.name.as_str()))
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// A `type alias` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDecl {
    /// Alias name.
    pub name: String,

    /// Documentation comment.
    #[serde(default)]
    pub comment: String,

    /// Aliased type, as raw signature text.
    #[serde(rename = "type")]
    pub type_: String,

    /// Type parameter names in order.
    #[serde(default)]
    pub args: Vec<String>,
}

/// A tagged-union `type` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionTypeDecl {
    /// Type name.
    pub name: String,

    /// Documentation comment.
    #[serde(default)]
    pub comment: String,

    /// Type parameter names in order.
    #[serde(default)]
    pub args: Vec<String>,

    /// Exposed constructors in order. Empty for opaque types.
    #[serde(default)]
    pub cases: Vec<UnionCase>,
}

/// One constructor of a union type.
///
/// Encoded on the wire as a pair: `["Just", ["a"]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<String>)", into = "(String, Vec<String>)")]
pub struct UnionCase {
    /// Constructor name.
    pub name: String,
    /// Argument types, as raw signature text.
    pub args: Vec<String>,
}

impl From<(String, Vec<String>)> for UnionCase {
    fn from((name, args): (String, Vec<String>)) -> Self {
        Self { name, args }
    }
}

impl From<UnionCase> for (String, Vec<String>) {
    fn from(case: UnionCase) -> Self {
        (case.name, case.args)
    }
}

/// A value declaration: function, constant or operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDecl {
    /// Value name. Operators appear bare, e.g. `::`.
    pub name: String,

    /// Documentation comment.
    #[serde(default)]
    pub comment: String,

    /// Type signature text. May span several lines.
    #[serde(rename = "type")]
    pub type_: String,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse the compiler's docs output into module records.
///
/// The document must be a JSON array of module objects.
///
/// # Errors
///
/// Returns `SchemaError::Json` if the text is not valid JSON or does not
/// match the module record schema.
pub fn parse_modules(json: &str) -> Result<Vec<ModuleRecord>, SchemaError> {
    Ok(serde_json::from_str(json)?)
}
