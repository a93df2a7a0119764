//! Declaration block rendering.
//!
//! Renders each alias, union type and value of a module into a Markdown
//! block: a heading, a fenced signature and the declaration's comment,
//! closed by a horizontal rule. Blocks are keyed by declaration name so
//! `@docs` directives can pull them into the module prose.

use std::sync::LazyLock;

use elmdocs_core::{AliasDecl, ModuleRecord, UnionTypeDecl, ValueDecl};
use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::line::{self, is_blank};
use crate::options::RenderOptions;

/// Opening fence for Elm code blocks.
pub const FENCE_OPEN: &str = "```elm";

/// Closing fence.
pub const FENCE_CLOSE: &str = "```";

/// Dotted identifiers such as `Json.Decode.Value`.
static QUALIFIED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z_][A-Za-z0-9_']*(?:\.[A-Za-z_][A-Za-z0-9_']*)+").expect("valid regex")
});

/// Rendered declaration blocks of one module, keyed by declaration name.
pub type DeclarationMap = IndexMap<String, String>;

/// Render every declaration of `module` into a name-keyed map.
///
/// Aliases are inserted first, then union types, then values. A later
/// declaration replaces an earlier one with the same name.
#[must_use]
pub fn collect_declarations(module: &ModuleRecord, options: &RenderOptions) -> DeclarationMap {
    let mut map = DeclarationMap::new();

    let aliases = module
        .aliases
        .iter()
        .map(|alias| (&alias.name, render_alias(alias)));
    let types = module
        .types
        .iter()
        .map(|union| (&union.name, render_union(union)));
    let values = module
        .values
        .iter()
        .map(|value| (&value.name, render_value(value, &module.name, options)));

    for (name, block) in aliases.chain(types).chain(values) {
        if map.insert(name.clone(), block).is_some() {
            tracing::warn!(module = %module.name, name = %name, "duplicate declaration name");
        }
    }

    map
}

/// Render a `type alias` declaration.
#[must_use]
pub fn render_alias(alias: &AliasDecl) -> String {
    let mut words = vec!["type alias", alias.name.as_str()];
    words.extend(alias.args.iter().map(String::as_str));
    words.push("=");
    words.push(alias.type_.as_str());

    render_block(&alias.name, &join_words(words), &alias.comment)
}

/// Render a union `type` declaration, one constructor per line.
#[must_use]
pub fn render_union(union: &UnionTypeDecl) -> String {
    let mut head = vec!["type", union.name.as_str()];
    head.extend(union.args.iter().map(String::as_str));

    let mut lines = vec![join_words(head)];
    for (i, case) in union.cases.iter().enumerate() {
        let lead = if i == 0 { "=" } else { "|" };
        let mut words = vec![case.name.as_str()];
        words.extend(case.args.iter().map(String::as_str));
        lines.push(format!("    {lead} {}", join_words(words)));
    }

    render_block(&union.name, &lines.join("\n"), &union.comment)
}

/// Render a value declaration.
///
/// References qualified with `module_name` are shown unqualified, and
/// indented code samples in the comment are fenced.
#[must_use]
pub fn render_value(value: &ValueDecl, module_name: &str, options: &RenderOptions) -> String {
    let display = options.operator_style.display(&value.name);
    let signature = format!(
        "{display} : {}",
        strip_module_qualifier(&value.type_, module_name)
    );

    render_block(&display, &signature, &fence_code_samples(&value.comment))
}

/// Remove `module_name.` from every reference qualified with exactly that
/// module.
///
/// References to deeper modules that only share the prefix are kept:
/// seen from `Foo`, `Foo.T` becomes `T` but `Foo.Bar.T` is untouched.
#[must_use]
pub fn strip_module_qualifier(signature: &str, module_name: &str) -> String {
    if module_name.is_empty() {
        return signature.to_string();
    }

    let prefix = format!("{module_name}.");
    QUALIFIED_NAME
        .replace_all(signature, |caps: &Captures| {
            let reference = &caps[0];
            match reference.strip_prefix(prefix.as_str()) {
                Some(local) if !local.contains('.') => local.to_string(),
                _ => reference.to_string(),
            }
        })
        .into_owned()
}

/// Wrap each run of four-space-indented lines in a fenced code block.
///
/// The indent is removed from every line of the run and blank lines inside
/// the run are dropped. Blank lines after a run, and all other text, are
/// left as they are.
#[must_use]
pub fn fence_code_samples(comment: &str) -> String {
    let lines: Vec<&str> = comment.split('\n').collect();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if line::code_sample(lines[i]).is_none() {
            out.push(lines[i]);
            i += 1;
            continue;
        }

        let mut run = Vec::new();
        let mut end = i;
        for (j, candidate) in lines.iter().enumerate().skip(i) {
            if let Some(code) = line::code_sample(candidate) {
                run.push(code);
                end = j + 1;
            } else if !is_blank(candidate) {
                break;
            }
        }

        out.push(FENCE_OPEN);
        out.extend(run);
        out.push(FENCE_CLOSE);
        i = end;
    }

    out.join("\n")
}

/// Assemble one declaration block.
fn render_block(heading: &str, code: &str, comment: &str) -> String {
    let mut sections = vec![
        String::new(),
        format!("### `{heading}`"),
        FENCE_OPEN.to_string(),
        code.to_string(),
        FENCE_CLOSE.to_string(),
    ];

    let comment = comment.trim_end().trim_start_matches(['\n', '\r']);
    if !is_blank(comment) {
        sections.push(String::new());
        sections.push(comment.to_string());
    }

    sections.push(String::new());
    sections.push("---".to_string());
    sections.push(String::new());
    sections.join("\n")
}

/// Join the non-empty words with single spaces.
fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
