#![no_main]

use elmdocs_core::{ModuleRecord, ValueDecl};
use elmdocs_markdown::{RenderOptions, build_document};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(comment) = std::str::from_utf8(data) else {
        return;
    };

    let module = ModuleRecord {
        name: "Fuzz".to_string(),
        comment: comment.to_string(),
        aliases: Vec::new(),
        types: Vec::new(),
        values: vec![ValueDecl {
            name: "value".to_string(),
            comment: comment.to_string(),
            type_: "Fuzz.T -> Int".to_string(),
        }],
        generated_with_elm_version: None,
    };

    let _ = build_document(&[module], &RenderOptions::default());
});
