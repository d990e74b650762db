//! Registry load errors.
//!
//! Every error is fatal: the loader stops at the first bad line and returns one [`RegistryError`].

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// Which of the two redundant code spellings a number error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeField {
    Decimal,
    Hex,
}

impl fmt::Display for CodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeField::Decimal => write!(f, "decimal"),
            CodeField::Hex => write!(f, "hex"),
        }
    }
}

/// What went wrong on a registry line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryErrorKind {
    /// The second field is missing or is not written as a `0x`-prefixed hex literal.
    #[error("illegal line: second field must be a `0x`-prefixed hex code")]
    MalformedLine,

    /// The decimal and hex spellings of the code disagree.
    #[error("value mismatch: decimal {decimal} does not match hex 0x{hex:x}")]
    ValueMismatch { decimal: u64, hex: u64 },

    /// The line has a code but no name.
    #[error("missing name")]
    MissingName,

    /// A code field contains characters that are not digits of its base.
    #[error("invalid {field} code `{token}`")]
    InvalidNumber { field: CodeField, token: String },

    /// The code does not fit the 16-bit code space.
    #[error("code {value} is outside the 16-bit code space (0..=65535)")]
    CodeOutOfRange { value: String },

    /// The code was already registered and duplicates are rejected.
    #[error("duplicate code 0x{code:04x} (first registered on line {first_line})")]
    DuplicateCode { code: u16, first_line: usize },
}

impl RegistryErrorKind {
    /// Stable diagnostic code, suitable for `miette`-style reporting.
    pub fn code(&self) -> &'static str {
        match self {
            RegistryErrorKind::MalformedLine => "cicgen::registry::malformed_line",
            RegistryErrorKind::ValueMismatch { .. } => "cicgen::registry::value_mismatch",
            RegistryErrorKind::MissingName => "cicgen::registry::missing_name",
            RegistryErrorKind::InvalidNumber { .. } => "cicgen::registry::invalid_number",
            RegistryErrorKind::CodeOutOfRange { .. } => "cicgen::registry::code_out_of_range",
            RegistryErrorKind::DuplicateCode { .. } => "cicgen::registry::duplicate_code",
        }
    }

    /// A short hint on how to fix the line.
    pub fn help(&self) -> &'static str {
        match self {
            RegistryErrorKind::MalformedLine => "entries look like `7 0x0007 Some Name`",
            RegistryErrorKind::ValueMismatch { .. } => "the decimal and hex columns must spell the same code",
            RegistryErrorKind::MissingName => "add a name after the hex code",
            RegistryErrorKind::InvalidNumber { field: CodeField::Decimal, .. } => {
                "the first column must be a base-10 number"
            }
            RegistryErrorKind::InvalidNumber { field: CodeField::Hex, .. } => {
                "the second column must be `0x` followed by hex digits"
            }
            RegistryErrorKind::CodeOutOfRange { .. } => "codes are 16-bit: the largest allowed code is 65535 (0xffff)",
            RegistryErrorKind::DuplicateCode { .. } => "remove one of the two entries",
        }
    }
}

/// A fatal registry error, tied to the line that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (line {line_number}: `{line}`)")]
pub struct RegistryError {
    pub kind: RegistryErrorKind,
    /// 1-based line number within the registry.
    pub line_number: usize,
    /// The offending line, without its line terminator.
    pub line: String,
    /// Byte range within `line` to point diagnostics at.
    pub span: Range<usize>,
}

impl RegistryError {
    pub fn new(kind: RegistryErrorKind, line_number: usize, line: &str, span: Range<usize>) -> Self {
        Self {
            kind,
            line_number,
            line: line.to_string(),
            span,
        }
    }
}
