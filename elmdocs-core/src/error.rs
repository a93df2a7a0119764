//! Core error types for `elmdocs`
//!
//! Errors raised while decoding the compiler's docs JSON.

use thiserror::Error;

/// Errors that can occur while decoding docs JSON.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document is not valid JSON or does not match the module schema.
    #[error("malformed docs JSON: {0}")]
    Json(#[from] serde_json::Error),
}
