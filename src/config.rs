//! Generator configuration
//!
//! Defaults reproduce the fixed conventions: read `cic.txt`, write `cic.h` and `cic.c` into the
//! current directory, declare `get_cic`.

use std::path::{Path, PathBuf};

use cicgen_core::{DuplicatePolicy, LoadOptions};
use thiserror::Error;

/// Default registry file name
pub const DEFAULT_REGISTRY: &str = "cic.txt";
/// Default artifact stem
pub const DEFAULT_STEM: &str = "cic";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("stem `{0}` is not a valid C identifier")]
    InvalidStem(String),
}

/// Emitter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Base name of the artifacts, include guard and lookup function
    stem: String,
    /// Registry file name mentioned in the generated-file banner
    registry_name: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            stem: DEFAULT_STEM.to_string(),
            registry_name: DEFAULT_REGISTRY.to_string(),
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the artifact stem. It must be a valid C identifier.
    pub fn with_stem(mut self, stem: &str) -> Result<Self, ConfigError> {
        if !is_c_identifier(stem) {
            return Err(ConfigError::InvalidStem(stem.to_string()));
        }
        self.stem = stem.to_string();
        Ok(self)
    }

    /// Set the registry name shown in the banner
    pub fn with_registry_name(mut self, name: impl Into<String>) -> Self {
        self.registry_name = name.into();
        self
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn registry_name(&self) -> &str {
        &self.registry_name
    }

    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.stem)
    }

    pub fn source_file_name(&self) -> String {
        format!("{}.c", self.stem)
    }

    /// Include guard macro, e.g. `H_CIC`
    pub fn include_guard(&self) -> String {
        format!("H_{}", self.stem.to_ascii_uppercase())
    }

    /// Lookup function name, e.g. `get_cic`
    pub fn function_name(&self) -> String {
        format!("get_{}", self.stem)
    }

    /// Lookup function parameter name
    pub fn param_name(&self) -> &str {
        &self.stem
    }
}

/// Everything one generator run needs: where to read, where to write, and how to load and emit.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub registry_path: PathBuf,
    pub out_dir: PathBuf,
    pub load: LoadOptions,
    pub emit: EmitConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from(DEFAULT_REGISTRY),
            out_dir: PathBuf::from("."),
            load: LoadOptions::default(),
            emit: EmitConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the registry from `path`; the banner names its file name.
    pub fn with_registry(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.emit = self.emit.with_registry_name(name);
        self.registry_path = path.to_path_buf();
        self
    }

    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_stem(mut self, stem: &str) -> Result<Self, ConfigError> {
        self.emit = self.emit.with_stem(stem)?;
        Ok(self)
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.load = self.load.with_duplicates(policy);
        self
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
        _ => false,
    }
}
