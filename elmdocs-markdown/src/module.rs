//! Per-module section assembly.
//!
//! A module section is the module heading, an index linking every name
//! the module documents, and the module comment with its directives
//! resolved. Anchors are allocated up front in an outline so the document
//! builder can register them in document order before anything is
//! rendered.

use elmdocs_core::ModuleRecord;

use crate::anchor::AnchorRegistry;
use crate::declaration::collect_declarations;
use crate::directive::{extract_docs_names, resolve_comment};
use crate::error::DocsError;
use crate::options::RenderOptions;

/// A linkable heading: display name plus allocated anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Declaration or module name, as keyed (operators bare).
    pub name: String,
    /// Fragment identifier, without the leading `#`.
    pub anchor: String,
}

/// Anchors for one module section, allocated before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOutline {
    /// The module heading.
    pub heading: IndexEntry,
    /// Every `@docs` name in directive order.
    pub entries: Vec<IndexEntry>,
}

impl ModuleOutline {
    /// Allocate anchors for `module`: its heading first, then each
    /// documented name in directive order.
    pub fn plan(module: &ModuleRecord, registry: &mut AnchorRegistry) -> Self {
        let heading = IndexEntry {
            name: module.name.clone(),
            anchor: registry.allocate(&module.name),
        };

        let entries = extract_docs_names(&module.comment)
            .into_iter()
            .map(|name| {
                let anchor = registry.allocate(&name);
                IndexEntry { name, anchor }
            })
            .collect();

        Self { heading, entries }
    }
}

/// Render one module section.
///
/// # Errors
///
/// Returns `DocsError::UnresolvedDirective` if the module comment documents
/// a name the module does not declare.
pub fn render_module(
    module: &ModuleRecord,
    outline: &ModuleOutline,
    options: &RenderOptions,
) -> Result<String, DocsError> {
    let declarations = collect_declarations(module, options);
    let body = resolve_comment(&module.comment, &module.name, &declarations)?;

    tracing::debug!(
        module = %module.name,
        declarations = declarations.len(),
        documented = outline.entries.len(),
        "rendered module"
    );

    let mut sections = vec![format!("# {}", outline.heading.name), String::new()];
    for entry in &outline.entries {
        sections.push(format!(
            "- [{}](#{})",
            options.operator_style.display(&entry.name),
            entry.anchor
        ));
    }
    sections.push(String::new());
    sections.push(body);
    sections.push(String::new());

    Ok(sections.join("\n"))
}
