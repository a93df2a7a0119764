//! Whole-document assembly.
//!
//! Produces the final Markdown: a `# Modules` table of contents, every
//! module section in input order, and a generation footer.

use elmdocs_core::ModuleRecord;

use crate::anchor::AnchorRegistry;
use crate::error::DocsError;
use crate::module::{ModuleOutline, render_module};
use crate::options::RenderOptions;

/// Title of the table of contents heading.
pub const CONTENTS_TITLE: &str = "Modules";

/// Tool name reported in the footer.
pub const TOOL_NAME: &str = "elmdocs";

/// Compiler version reported when the first record carries none.
const UNKNOWN_VERSION: &str = "unknown";

/// Builds one document. Owns the anchor registry for that build.
#[derive(Debug)]
pub struct DocumentBuilder<'a> {
    options: &'a RenderOptions,
    registry: AnchorRegistry,
}

impl<'a> DocumentBuilder<'a> {
    /// Create a builder with an empty anchor registry.
    #[must_use]
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            registry: AnchorRegistry::new(),
        }
    }

    /// Render `modules` into a complete Markdown document.
    ///
    /// Anchors are allocated in a first pass, in the order their headings
    /// appear: the contents heading, then each module's heading followed
    /// by its documented names. Sections are rendered in a second pass.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::UnresolvedDirective` if any module documents a
    /// name it does not declare.
    pub fn build(mut self, modules: &[ModuleRecord]) -> Result<String, DocsError> {
        self.registry.allocate(CONTENTS_TITLE);

        let outlines: Vec<ModuleOutline> = modules
            .iter()
            .map(|module| ModuleOutline::plan(module, &mut self.registry))
            .collect();

        tracing::debug!(
            modules = modules.len(),
            anchors = self.registry.total(),
            "allocated anchors"
        );

        let mut sections = vec![format!("# {CONTENTS_TITLE}"), String::new()];
        for outline in &outlines {
            sections.push(format!(
                "- [{}](#{})",
                outline.heading.name, outline.heading.anchor
            ));
        }
        sections.push(String::new());

        for (module, outline) in modules.iter().zip(&outlines) {
            sections.push(render_module(module, outline, self.options)?);
        }

        sections.push(self.footer(modules));
        Ok(sections.join("\n"))
    }

    fn footer(&self, modules: &[ModuleRecord]) -> String {
        let compiler_version = modules
            .first()
            .and_then(|m| m.generated_with_elm_version.as_deref())
            .unwrap_or(UNKNOWN_VERSION);

        format!(
            "---\n\n> Generated with {}: {compiler_version} and {TOOL_NAME}: {}\n",
            self.options.compiler_label, self.options.tool_version
        )
    }
}

/// Render `modules` into a complete Markdown document with a fresh
/// anchor registry.
///
/// # Errors
///
/// Returns `DocsError::UnresolvedDirective` if any module documents a
/// name it does not declare.
pub fn build_document(modules: &[ModuleRecord], options: &RenderOptions) -> Result<String, DocsError> {
    DocumentBuilder::new(options).build(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elmdocs_core::{ValueDecl, parse_modules};

    fn options() -> RenderOptions {
        RenderOptions {
            tool_version: "9.9.9".to_string(),
            ..RenderOptions::default()
        }
    }

    fn module_with_map(name: &str) -> ModuleRecord {
        ModuleRecord {
            name: name.to_string(),
            comment: "@docs map".to_string(),
            values: vec![ValueDecl {
                name: "map".to_string(),
                comment: String::new(),
                type_: format!("(a -> b) -> {name}.T a -> {name}.T b"),
            }],
            generated_with_elm_version: Some("0.18.0".to_string()),
            ..ModuleRecord::default()
        }
    }

    #[test]
    fn test_scenario_single_value() {
        let modules = parse_modules(
            r##"[{"name":"Foo","comment":"# Foo\n@docs bar","aliases":[],"types":[],
                 "values":[{"name":"bar","comment":"adds one","type":"Int"}],
                 "generated-with-elm-version":"0.18.0"}]"##,
        )
        .unwrap();
        let doc = build_document(&modules, &options()).unwrap();

        assert!(doc.contains("### `bar`"));
        assert!(doc.contains("```elm\nbar : Int\n```"));
        assert!(doc.contains("adds one"));
    }

    #[test]
    fn test_full_document_layout() {
        let modules = vec![module_with_map("Foo")];
        let doc = build_document(&modules, &options()).unwrap();
        assert_eq!(
            doc,
            "# Modules\n\
             \n\
             - [Foo](#foo)\n\
             \n\
             # Foo\n\
             \n\
             - [map](#map)\n\
             \n\
             \n\
             ### `map`\n\
             ```elm\n\
             map : (a -> b) -> T a -> T b\n\
             ```\n\
             \n\
             ---\n\
             \n\
             \n\
             ---\n\
             \n\
             > Generated with elm-make: 0.18.0 and elmdocs: 9.9.9\n"
        );
    }

    #[test]
    fn test_repeated_names_across_modules() {
        let modules = vec![module_with_map("Foo"), module_with_map("Bar")];
        let doc = build_document(&modules, &options()).unwrap();
        assert!(doc.contains("- [map](#map)\n"));
        assert!(doc.contains("- [map](#map-1)\n"));
        assert!(!doc.contains("#map-2"));
    }

    #[test]
    fn test_module_named_like_contents_heading() {
        let modules = vec![module_with_map("Modules")];
        let doc = build_document(&modules, &options()).unwrap();
        assert!(doc.contains("- [Modules](#modules-1)"));
    }

    #[test]
    fn test_toc_lists_modules_in_input_order() {
        let modules = vec![module_with_map("Json.Decode"), module_with_map("Array")];
        let doc = build_document(&modules, &options()).unwrap();
        let decode = doc.find("- [Json.Decode](#jsondecode)").unwrap();
        let array = doc.find("- [Array](#array)").unwrap();
        assert!(decode < array);
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let modules = vec![
            module_with_map("Foo"),
            module_with_map("Bar"),
            module_with_map("Foo"),
        ];
        let first = build_document(&modules, &options()).unwrap();
        let second = build_document(&modules, &options()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("(#foo-1)"));
        assert!(first.contains("(#map-2)"));
    }

    #[test]
    fn test_footer_unknown_compiler_version() {
        let mut module = module_with_map("Foo");
        module.generated_with_elm_version = None;
        let doc = build_document(&[module], &options()).unwrap();
        assert!(doc.ends_with("> Generated with elm-make: unknown and elmdocs: 9.9.9\n"));
    }

    #[test]
    fn test_unresolved_directive_aborts_build() {
        let mut module = module_with_map("Foo");
        module.comment = "@docs mapp".to_string();
        let err = build_document(&[module], &options()).unwrap_err();
        assert!(err.to_string().contains("did you mean `map`"));
    }

    #[test]
    fn test_empty_input_renders_contents_only() {
        let doc = build_document(&[], &options()).unwrap();
        assert!(doc.starts_with("# Modules\n"));
        assert!(doc.contains("unknown"));
    }
}
