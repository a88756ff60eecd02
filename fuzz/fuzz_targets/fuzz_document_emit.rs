#![no_main]

use std::path::Path;

use cppbdd::{Dialect, DocumentLoader, emit};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        let loader = DocumentLoader::with_defaults();

        // Loading and rendering may fail, but must never panic
        if let Ok(document) = loader.load_from_str(yaml_str, Path::new("fuzz.yaml")) {
            for dialect in Dialect::ALL {
                let _ = emit(&document, dialect, "fuzz");
            }
        }
    }
});
