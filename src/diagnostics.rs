//! Diagnostics for registry errors
//!
//! Wraps a [`RegistryError`] into a `miette` diagnostic that points at the offending token in the registry
//! text, with a stable error code and a help line.

use std::fmt;

use cicgen_core::{CodeField, RegistryError, RegistryErrorKind};
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use thiserror::Error;

/// A registry error with its source context attached
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RegistryDiagnostic {
    message: String,
    code: &'static str,
    help: &'static str,
    label: String,
    src: NamedSource<String>,
    span: SourceSpan,
}

impl RegistryDiagnostic {
    /// Attach `source` (the full registry text, named `file_name`) to `err`.
    ///
    /// If `source` does not contain the failing line where `err` says it is, only that line is used as
    /// context.
    pub fn new(file_name: &str, source: &str, err: &RegistryError) -> Self {
        let (text, line_start) = match line_offset(source, err.line_number) {
            Some(start) if source[start..].starts_with(&err.line) => (source.to_string(), start),
            _ => (err.line.clone(), 0),
        };
        let span = SourceSpan::from((line_start + err.span.start, err.span.len()));

        Self {
            message: err.kind.to_string(),
            code: err.kind.code(),
            help: err.kind.help(),
            label: label_for(&err.kind),
            src: NamedSource::new(file_name, text),
            span,
        }
    }
}

impl Diagnostic for RegistryDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

/// Byte offset of the start of 1-based line `line_number`
fn line_offset(source: &str, line_number: usize) -> Option<usize> {
    let mut offset = 0;
    let mut lines = source.split_inclusive('\n');
    for _ in 1..line_number {
        offset += lines.next()?.len();
    }
    (offset <= source.len()).then_some(offset)
}

fn label_for(kind: &RegistryErrorKind) -> String {
    match kind {
        RegistryErrorKind::MalformedLine => "expected `0x` hex code here".to_string(),
        RegistryErrorKind::ValueMismatch { decimal, hex } => {
            format!("{} is 0x{:x}, not 0x{:x}", decimal, decimal, hex)
        }
        RegistryErrorKind::MissingName => "expected a name here".to_string(),
        RegistryErrorKind::InvalidNumber {
            field: CodeField::Decimal,
            ..
        } => "not a decimal number".to_string(),
        RegistryErrorKind::InvalidNumber { field: CodeField::Hex, .. } => "not a hex number".to_string(),
        RegistryErrorKind::CodeOutOfRange { .. } => "larger than 0xffff".to_string(),
        RegistryErrorKind::DuplicateCode { first_line, .. } => format!("already registered on line {}", first_line),
    }
}

/// Render `err` as a graphical report against the registry text.
pub fn render_registry_error(file_name: &str, source: &str, err: &RegistryError, color: bool) -> String {
    let diagnostic = RegistryDiagnostic::new(file_name, source, err);
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let mut out = String::new();
    match GraphicalReportHandler::new_themed(theme).render_report(&mut out, &diagnostic) {
        Ok(()) => out,
        Err(_) => format!("error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "0 0x0000 N64\n7 0x0008 Name\n";

    #[test]
    fn test_line_offset() {
        assert_eq!(line_offset(SOURCE, 1), Some(0));
        assert_eq!(line_offset(SOURCE, 2), Some(13));
        assert_eq!(line_offset(SOURCE, 9), None);
    }

    #[test]
    fn test_span_points_into_full_source() {
        let err = cicgen_core::load(SOURCE).unwrap_err();
        let diagnostic = RegistryDiagnostic::new("cic.txt", SOURCE, &err);
        assert_eq!(diagnostic.span.offset(), 13);
        assert_eq!(&SOURCE[13..13 + diagnostic.span.len()], "7 0x0008");
    }

    #[test]
    fn test_falls_back_to_line_only() {
        let err = cicgen_core::load(SOURCE).unwrap_err();
        let diagnostic = RegistryDiagnostic::new("cic.txt", "unrelated text", &err);
        assert_eq!(diagnostic.span.offset(), 0);
    }

    #[test]
    fn test_render_mentions_code_line_and_help() {
        let err = cicgen_core::load(SOURCE).unwrap_err();
        let rendered = render_registry_error("cic.txt", SOURCE, &err, false);
        assert!(rendered.contains("cicgen::registry::value_mismatch"), "{rendered}");
        assert!(rendered.contains("7 0x0008 Name"), "{rendered}");
        assert!(rendered.contains("7 is 0x7, not 0x8"), "{rendered}");
        assert!(rendered.contains("must spell the same code"), "{rendered}");
    }
}
