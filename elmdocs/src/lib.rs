//! `elmdocs` - Markdown API references for Elm packages
//!
//! Runs `elm-make --docs`, reads the module records it writes and renders
//! them into a single Markdown document.

pub mod cli;
pub mod compiler;
pub mod error;
pub mod observability;
