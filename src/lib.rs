#![forbid(unsafe_code)]
//! cicgen: company identifier (CIC) lookup table generator
//!
//! Reads a hand-maintained registry (`cic.txt`) of `<decimal> 0x<hex> <name...>` lines, validates it with
//! [`cicgen_core`], and emits a C header and source defining `const char *get_cic(uint16_t cic)` as a dense
//! `switch` over the registered codes.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod config;
pub mod diagnostics;

pub use backend::{Artifact, ArtifactWriter, Artifacts, TableEmitter, emit};
pub use config::{EmitConfig, GeneratorConfig};
