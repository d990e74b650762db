#![no_main]

use cicgen::backend::emit;
use cicgen::config::EmitConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the loader; if the registry is valid, fuzz the emitter too
        if let Ok(registry) = cicgen_core::load(s) {
            let _ = emit(&registry, &EmitConfig::default());
        }
    }
});
