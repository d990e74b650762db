//! Load and validate the company identifier code (CIC) registry consumed by `cicgen`.
//!
//! The registry is a hand-maintained text file with one entry per line:
//!
//! ```text
//! <decimal_code> 0x<hex_code> <name...>
//! ```
//!
//! Every code is written twice (decimal and hex) as a transcription safeguard. Loading checks that both
//! spellings agree, that the code fits the 16-bit code space, and that a name is present.
//!
//! ## Notes
//!
//! - This is a pure crate: **no IO**, no global state. Callers hand it text and get a [`Registry`] back.
//! - The first error aborts loading. There is no partial result.
//!
//! ## Examples
//!
//! ```rust
//! use cicgen_core::{load, UNREGISTERED};
//!
//! let registry = load("0 0x0000 N64\n7 0x0007 Reserved \"beta\"\n").unwrap();
//! assert_eq!(registry.max_code(), 7);
//! assert_eq!(registry.lookup(7), "Reserved \\\"beta\\\"");
//! assert_eq!(registry.lookup(3), UNREGISTERED);
//! ```

pub mod entry;
pub mod errors;
pub mod escape;
pub mod loader;
pub mod registry;

pub use entry::{RegistryEntry, parse_entry};
pub use errors::{CodeField, RegistryError, RegistryErrorKind};
pub use escape::escape_name;
pub use loader::{DuplicatePolicy, LoadOptions, load, load_lines, load_with};
pub use registry::{RegisteredName, Registry};

/// Name returned for every code that has no registry entry.
pub const UNREGISTERED: &str = "*unregistered*";
