#![no_main]

use elmdocs_core::parse_modules;
use elmdocs_markdown::{RenderOptions, build_document};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        // Decoding or rendering may fail; neither may panic
        if let Ok(modules) = parse_modules(json) {
            let _ = build_document(&modules, &RenderOptions::default());
        }
    }
});
