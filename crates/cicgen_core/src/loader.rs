//! Registry loader: runs [`parse_entry`] over every line and builds the [`Registry`].

use crate::entry::parse_entry;
use crate::errors::{RegistryError, RegistryErrorKind};
use crate::registry::Registry;

/// What to do when a code is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later entry replaces the earlier one and a warning is logged.
    #[default]
    LastWins,
    /// A repeated code is a [`RegistryErrorKind::DuplicateCode`] error.
    Reject,
}

/// Loader configuration
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub duplicates: DuplicatePolicy,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate-code policy
    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

/// Load a registry from its full text with default options.
pub fn load(source: &str) -> Result<Registry, RegistryError> {
    load_with(source, &LoadOptions::default())
}

/// Load a registry from its full text.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn load_with(source: &str, options: &LoadOptions) -> Result<Registry, RegistryError> {
    load_lines(source.lines(), options)
}

/// Load a registry from a sequence of lines.
///
/// Reading stops at the first line without tokens, or when `lines` runs out. Non-blank lines after
/// that terminator are not parsed; a warning reports how many were skipped.
///
/// ## Errors
/// The first invalid line aborts the load. See [`parse_entry`] for the per-line checks, plus
/// [`RegistryErrorKind::DuplicateCode`] under [`DuplicatePolicy::Reject`].
pub fn load_lines<I, S>(lines: I, options: &LoadOptions) -> Result<Registry, RegistryError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut registry = Registry::new();
    let mut lines = lines.into_iter().enumerate();

    for (index, raw) in lines.by_ref() {
        let line_number = index + 1;
        let line = raw.as_ref().trim_end_matches(['\r', '\n']);
        let Some(entry) = parse_entry(line_number, line)? else {
            break;
        };

        if options.duplicates == DuplicatePolicy::Reject {
            if let Some(existing) = registry.get(entry.code) {
                let kind = RegistryErrorKind::DuplicateCode {
                    code: entry.code,
                    first_line: existing.line_number,
                };
                let start = line.len() - line.trim_start().len();
                return Err(RegistryError::new(kind, line_number, line, start..line.trim_end().len()));
            }
        }

        let code = entry.code;
        if let Some(previous) = registry.upsert(code, entry.name, line_number) {
            tracing::warn!(
                "code 0x{:04x} on line {} replaces \"{}\" from line {}",
                code,
                line_number,
                previous.name,
                previous.line_number
            );
        }
    }

    let skipped = lines.filter(|(_, raw)| !raw.as_ref().trim().is_empty()).count();
    if skipped > 0 {
        tracing::warn!("ignored {} registry line(s) after the blank end-of-input line", skipped);
    }

    tracing::debug!(entries = registry.len(), max_code = registry.max_code(), "registry loaded");
    Ok(registry)
}
