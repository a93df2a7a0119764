//! `@docs` directive resolution.
//!
//! A module comment is prose interleaved with `@docs a, b, c` lines. Each
//! directive is replaced by the rendered blocks of the names it lists, and
//! author headings are demoted one level so they nest under the module
//! heading.

use crate::declaration::DeclarationMap;
use crate::error::DocsError;
use crate::line::{LineKind, classify, parse_directive};

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

/// Resolve a module comment into final Markdown prose.
///
/// Lines are processed independently:
/// - `@docs` lines become the concatenation of the listed blocks
/// - `# Heading` lines become `## Heading`
/// - everything else passes through
///
/// Lines that are empty after processing are dropped.
///
/// # Errors
///
/// Returns `DocsError::UnresolvedDirective` if a directive names a
/// declaration missing from `declarations`.
pub fn resolve_comment(
    comment: &str,
    module_name: &str,
    declarations: &DeclarationMap,
) -> Result<String, DocsError> {
    let mut lines = Vec::new();

    for line in comment.lines() {
        let resolved = match classify(line) {
            LineKind::Directives(names) => {
                let mut blocks = String::new();
                for name in &names {
                    let block = declarations
                        .get(name)
                        .ok_or_else(|| unresolved(module_name, name, declarations))?;
                    blocks.push_str(block);
                }
                blocks
            }
            LineKind::Heading(heading) => format!("#{heading}"),
            LineKind::CodeSample(_) | LineKind::Plain(_) => line.to_string(),
        };

        if !resolved.is_empty() {
            lines.push(resolved);
        }
    }

    Ok(lines.join("\n"))
}

/// Every name referenced by an `@docs` directive in `comment`, in order.
///
/// Names are sanitized the same way the resolver sanitizes them, so each
/// entry is a declaration map key.
#[must_use]
pub fn extract_docs_names(comment: &str) -> Vec<String> {
    comment.lines().filter_map(parse_directive).flatten().collect()
}

fn unresolved(module_name: &str, name: &str, declarations: &DeclarationMap) -> DocsError {
    let suggestion = declarations
        .keys()
        .map(|candidate| (candidate, strsim::damerau_levenshtein(name, candidate)))
        .filter(|(_, dist)| *dist <= SUGGESTION_DISTANCE)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.clone());

    DocsError::UnresolvedDirective {
        module: module_name.to_string(),
        name: name.to_string(),
        suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declarations(entries: &[(&str, &str)]) -> DeclarationMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_directive_concatenates_blocks_in_listed_order() {
        let map = declarations(&[("a", "<A>"), ("b", "<B>"), ("c", "<C>")]);
        let out = resolve_comment("intro\n@docs c, a\noutro", "M", &map).unwrap();
        assert_eq!(out, "intro\n<C><A>\noutro");
    }

    #[test]
    fn test_operator_names_resolve_bare() {
        let map = declarations(&[("::", "<CONS>")]);
        let out = resolve_comment("@docs (::)", "List", &map).unwrap();
        assert_eq!(out, "<CONS>");
    }

    #[test]
    fn test_level_one_headings_are_demoted() {
        let map = DeclarationMap::new();
        let out = resolve_comment("# Mapping\n## Already nested", "M", &map).unwrap();
        assert_eq!(out, "## Mapping\n## Already nested");
    }

    #[test]
    fn test_empty_lines_are_dropped() {
        let map = DeclarationMap::new();
        let out = resolve_comment("first\n\n\nsecond\n", "M", &map).unwrap();
        assert_eq!(out, "first\nsecond");
    }

    #[test]
    fn test_whitespace_lines_are_kept() {
        let map = DeclarationMap::new();
        let out = resolve_comment("first\n  \nsecond", "M", &map).unwrap();
        assert_eq!(out, "first\n  \nsecond");
    }

    #[test]
    fn test_code_samples_pass_through() {
        let map = DeclarationMap::new();
        let out = resolve_comment("example:\n    x = 1", "M", &map).unwrap();
        assert_eq!(out, "example:\n    x = 1");
    }

    #[test]
    fn test_unresolved_directive_fails() {
        let map = declarations(&[("foldl", "<F>")]);
        let err = resolve_comment("@docs fold", "List.Extra", &map).unwrap_err();
        let DocsError::UnresolvedDirective {
            module,
            name,
            suggestion,
        } = err;
        assert_eq!(module, "List.Extra");
        assert_eq!(name, "fold");
        assert_eq!(suggestion.as_deref(), Some("foldl"));
    }

    #[test]
    fn test_unresolved_without_close_match() {
        let map = declarations(&[("map", "<M>")]);
        let err = resolve_comment("@docs completelyDifferent", "M", &map).unwrap_err();
        let DocsError::UnresolvedDirective { suggestion, .. } = err;
        assert!(suggestion.is_none());
    }

    #[test]
    fn test_extract_names_across_directives() {
        let comment = "# Basics\n@docs map, (|>)\n\nText\n@docs filter";
        assert_eq!(extract_docs_names(comment), vec!["map", "|>", "filter"]);
    }

    #[test]
    fn test_extract_names_none() {
        assert!(extract_docs_names("just prose").is_empty());
    }
}
