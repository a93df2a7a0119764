//! Documentation generation command handler.
//!
//! Loads docs JSON, renders the Markdown reference and writes it to the
//! output file.

use std::fs;
use std::path::PathBuf;

use elmdocs_core::parse_modules;
use elmdocs_markdown::{RenderOptions, build_document};
use tracing::{info, warn};

use crate::cli::args::Cli;
use crate::compiler::{CompilerSource, DocsSource, FileSource};
use crate::error::ElmDocsError;

/// Pick the docs source the arguments ask for.
#[must_use]
pub fn docs_source(cli: &Cli) -> Box<dyn DocsSource> {
    match cli.input {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => Box::new(CompilerSource::new(&cli.compiler, &cli.project_dir)),
    }
}

/// Build rendering options from the arguments.
#[must_use]
pub fn render_options(cli: &Cli) -> RenderOptions {
    RenderOptions {
        operator_style: cli.operator_style,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        ..RenderOptions::default()
    }
}

/// Execute a full documentation build.
///
/// Returns the path written. The output file is only touched once the
/// whole document has rendered.
///
/// # Errors
///
/// Returns an error if the docs source fails, the JSON is malformed or
/// empty, a directive is unresolved, or the output cannot be written.
pub fn run(cli: &Cli) -> Result<PathBuf, ElmDocsError> {
    let json = docs_source(cli).load()?;
    let modules = parse_modules(&json)?;

    if modules.is_empty() {
        warn!("compiler output contains no modules");
        return Err(ElmDocsError::EmptyResult);
    }
    info!(modules = modules.len(), "parsed docs JSON");

    let markdown = build_document(&modules, &render_options(cli))?;

    let output = cli.project_dir.join(&cli.output);
    fs::write(&output, markdown)?;
    info!(path = %output.display(), "wrote documentation");

    Ok(output)
}
