//! Backend: turn a validated [`Registry`] into the C lookup table.
//!
//! ## Output
//!
//! - `<stem>.h` declares `const char *get_<stem>(uint16_t <stem>);` behind an include guard. It does not
//!   depend on the registry.
//! - `<stem>.c` defines the function as a `switch` with one `case` per registered code, walked in ascending
//!   order over `0..=max_code`, followed by `return "*unregistered*";`.
//!
//! The table is compiled into a switch rather than built as a runtime array or map. Rendering is a pure
//! function of the registry and config, so repeated runs are byte-identical.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod artifacts;
pub mod c_emitter;

pub use artifacts::{ArtifactWriter, Staleness};
pub use c_emitter::CEmitter;

use cicgen_core::{Registry, UNREGISTERED};

use crate::config::EmitConfig;

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

/// The declaration and definition artifacts of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header: Artifact,
    pub source: Artifact,
}

impl Artifacts {
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        [&self.header, &self.source].into_iter()
    }
}

/// Renders the lookup table for a registry
pub struct TableEmitter<'a> {
    config: &'a EmitConfig,
}

impl<'a> TableEmitter<'a> {
    pub fn new(config: &'a EmitConfig) -> Self {
        Self { config }
    }

    fn banner(&self, e: &mut CEmitter) {
        e.comment(&format!(
            "Generated by cicgen from {}. Do not edit by hand.",
            self.config.registry_name()
        ));
    }

    fn signature(&self) -> String {
        format!(
            "const char *{}(uint16_t {})",
            self.config.function_name(),
            self.config.param_name()
        )
    }

    /// Render the declaration artifact.
    pub fn header(&self) -> String {
        let guard = self.config.include_guard();
        let mut e = CEmitter::new();
        self.banner(&mut e);
        e.linef(format_args!("#ifndef {}", guard));
        e.linef(format_args!("#  define {}", guard));
        e.line("#  include <stdint.h>");
        e.linef(format_args!("{};", self.signature()));
        e.line("#endif");
        e.finish()
    }

    /// Render the definition artifact.
    #[tracing::instrument(skip_all, fields(entries = registry.len(), max_code = registry.max_code()))]
    pub fn source(&self, registry: &Registry) -> String {
        let mut e = CEmitter::new();
        self.banner(&mut e);
        e.linef(format_args!("#include \"{}\"", self.config.header_file_name()));
        e.block(&self.signature(), |e| {
            e.switch(self.config.param_name(), |e| {
                for code in 0..=registry.max_code() {
                    if let Some(entry) = registry.get(code) {
                        e.return_case(code, &entry.name);
                    }
                }
            });
            e.linef(format_args!("return \"{}\";", UNREGISTERED));
        });
        e.finish()
    }

    /// Render both artifacts.
    pub fn emit(&self, registry: &Registry) -> Artifacts {
        Artifacts {
            header: Artifact {
                file_name: self.config.header_file_name(),
                contents: self.header(),
            },
            source: Artifact {
                file_name: self.config.source_file_name(),
                contents: self.source(registry),
            },
        }
    }
}

/// Render both artifacts for `registry`.
pub fn emit(registry: &Registry, config: &EmitConfig) -> Artifacts {
    TableEmitter::new(config).emit(registry)
}
