//! Layering guardrails to keep the registry core free of CLI and rendering dependencies.
//!
//! `cicgen_core` is the pure loader. This test scans its `Cargo.toml` and fails if a CLI,
//! diagnostic-rendering, or subscriber crate appears in its `[dependencies]`.

const FORBIDDEN: &[&str] = &["clap", "miette", "tracing-subscriber", "cicgen"];

#[test]
fn core_does_not_depend_on_shell_crates() {
    let manifest = include_str!("../crates/cicgen_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        let name = line_no_comment.split('=').next().unwrap_or("").trim();
        if FORBIDDEN.contains(&name) {
            panic!("`{}` must not appear in cicgen_core's [dependencies]", name);
        }
    }
}

#[test]
fn core_sources_do_no_file_io() {
    let sources = [
        include_str!("../crates/cicgen_core/src/lib.rs"),
        include_str!("../crates/cicgen_core/src/entry.rs"),
        include_str!("../crates/cicgen_core/src/errors.rs"),
        include_str!("../crates/cicgen_core/src/escape.rs"),
        include_str!("../crates/cicgen_core/src/loader.rs"),
        include_str!("../crates/cicgen_core/src/registry.rs"),
    ];
    for source in sources {
        assert!(!source.contains("std::fs"), "cicgen_core must not touch the filesystem");
    }
}
