//! Parse a single registry line into a [`RegistryEntry`].
//!
//! ## Notes
//! - Checks run in a fixed order: decimal code, `0x` prefix, hex code, decimal/hex agreement,
//!   16-bit range, name. The first failing check decides the error.
//! - The agreement check compares the full parsed values before the range check, so `70000 0x11171`
//!   is reported as a mismatch rather than as out of range.

use std::num::IntErrorKind;
use std::ops::Range;

use crate::errors::{CodeField, RegistryError, RegistryErrorKind};
use crate::escape::escape_name;

/// One validated registry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub code: u16,
    /// The hex spelling of `code`. Always equal to `code` once parsed.
    pub hex_code: u16,
    /// Display name with the quoting transform applied.
    pub name: String,
}

/// Split `line` on whitespace, keeping each token's byte range.
fn tokenize(line: &str) -> Vec<(Range<usize>, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push((s..i, &line[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push((s..line.len(), &line[s..]));
    }
    tokens
}

fn parse_code(digits: &str, radix: u32, field: CodeField, token: &str) -> Result<u64, RegistryErrorKind> {
    u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => RegistryErrorKind::CodeOutOfRange {
            value: token.to_string(),
        },
        _ => RegistryErrorKind::InvalidNumber {
            field,
            token: token.to_string(),
        },
    })
}

/// Parse one registry line.
///
/// ## Parameters
/// - `line_number`: 1-based position of the line, recorded in errors.
/// - `line`: the raw line, with or without its terminator.
///
/// ## Returns
/// - `Ok(None)`: the line holds no tokens. This is the end-of-input marker.
/// - `Ok(Some(entry))`: a validated entry.
///
/// ## Errors
/// - [`RegistryErrorKind::MalformedLine`] if the second token is missing or lacks the `0x` prefix.
/// - [`RegistryErrorKind::InvalidNumber`] if a code token is not a number in its base.
/// - [`RegistryErrorKind::ValueMismatch`] if the decimal and hex codes disagree.
/// - [`RegistryErrorKind::CodeOutOfRange`] if the code does not fit in 16 bits.
/// - [`RegistryErrorKind::MissingName`] if fewer than three tokens are present.
pub fn parse_entry(line_number: usize, line: &str) -> Result<Option<RegistryEntry>, RegistryError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let tokens = tokenize(line);
    let fail = |kind: RegistryErrorKind, span: Range<usize>| RegistryError::new(kind, line_number, line, span);

    let Some((dec_span, dec_token)) = tokens.first().cloned() else {
        return Ok(None);
    };
    let decimal = parse_code(dec_token, 10, CodeField::Decimal, dec_token).map_err(|k| fail(k, dec_span.clone()))?;

    let Some((hex_span, hex_token)) = tokens.get(1).cloned() else {
        return Err(fail(RegistryErrorKind::MalformedLine, dec_span.end..dec_span.end));
    };
    let Some(hex_digits) = hex_token.strip_prefix("0x") else {
        return Err(fail(RegistryErrorKind::MalformedLine, hex_span));
    };
    let hex = parse_code(hex_digits, 16, CodeField::Hex, hex_token).map_err(|k| fail(k, hex_span.clone()))?;

    if hex != decimal {
        return Err(fail(
            RegistryErrorKind::ValueMismatch { decimal, hex },
            dec_span.start..hex_span.end,
        ));
    }
    let code = u16::try_from(decimal).map_err(|_| {
        fail(
            RegistryErrorKind::CodeOutOfRange {
                value: dec_token.to_string(),
            },
            dec_span.clone(),
        )
    })?;

    if tokens.len() < 3 {
        return Err(fail(RegistryErrorKind::MissingName, hex_span.end..hex_span.end));
    }
    let name = tokens[2..].iter().map(|(_, t)| *t).collect::<Vec<_>>().join(" ");

    Ok(Some(RegistryEntry {
        code,
        hex_code: code,
        name: escape_name(&name).into_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(line: &str) -> RegistryErrorKind {
        parse_entry(1, line).unwrap_err().kind
    }

    #[test]
    fn test_parse_simple_entry() {
        let entry = parse_entry(1, "7 0x0007 Nintendo reserved chip").unwrap().unwrap();
        assert_eq!(entry.code, 7);
        assert_eq!(entry.hex_code, 7);
        assert_eq!(entry.name, "Nintendo reserved chip");
    }

    #[test]
    fn test_name_whitespace_is_normalized() {
        let entry = parse_entry(1, "  76\t0x004C   Apple,\t Inc.  \r\n").unwrap().unwrap();
        assert_eq!(entry.code, 76);
        assert_eq!(entry.name, "Apple, Inc.");
    }

    #[test]
    fn test_uppercase_hex_digits() {
        let entry = parse_entry(1, "767 0x02FF Silicon Laboratories").unwrap().unwrap();
        assert_eq!(entry.code, 0x02ff);
    }

    #[test]
    fn test_blank_line_is_end_of_input() {
        assert_eq!(parse_entry(1, ""), Ok(None));
        assert_eq!(parse_entry(1, "   \t \n"), Ok(None));
    }

    #[test]
    fn test_name_quotes_are_escaped() {
        let entry = parse_entry(1, r#"7 0x0007 He said "hi""#).unwrap().unwrap();
        assert_eq!(entry.name, r#"He said \"hi\""#);
    }

    #[test]
    fn test_missing_hex_prefix_is_malformed() {
        assert_eq!(kind_of("7 0007 Name"), RegistryErrorKind::MalformedLine);
        assert_eq!(kind_of("7 0X0007 Name"), RegistryErrorKind::MalformedLine);
    }

    #[test]
    fn test_single_token_is_malformed() {
        assert_eq!(kind_of("7"), RegistryErrorKind::MalformedLine);
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(
            kind_of("7 0x0008 Name"),
            RegistryErrorKind::ValueMismatch { decimal: 7, hex: 8 }
        );
    }

    #[test]
    fn test_two_tokens_is_missing_name() {
        assert_eq!(kind_of("7 0x0007"), RegistryErrorKind::MissingName);
    }

    #[test]
    fn test_mismatch_reported_before_missing_name() {
        assert_eq!(kind_of("7 0x0009"), RegistryErrorKind::ValueMismatch { decimal: 7, hex: 9 });
    }

    #[test]
    fn test_invalid_decimal() {
        assert_eq!(
            kind_of("seven 0x0007 Name"),
            RegistryErrorKind::InvalidNumber {
                field: CodeField::Decimal,
                token: "seven".to_string()
            }
        );
        assert!(matches!(kind_of("-1 0x0001 Name"), RegistryErrorKind::InvalidNumber { .. }));
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(
            kind_of("7 0x Name"),
            RegistryErrorKind::InvalidNumber {
                field: CodeField::Hex,
                token: "0x".to_string()
            }
        );
        assert!(matches!(kind_of("7 0xg7 Name"), RegistryErrorKind::InvalidNumber { .. }));
    }

    #[test]
    fn test_code_out_of_range() {
        assert_eq!(
            kind_of("65536 0x10000 Too big"),
            RegistryErrorKind::CodeOutOfRange {
                value: "65536".to_string()
            }
        );
        assert!(parse_entry(1, "65535 0xffff Largest").unwrap().is_some());
    }

    #[test]
    fn test_overflowing_decimal_is_out_of_range() {
        assert!(matches!(
            kind_of("99999999999999999999999 0x1 Name"),
            RegistryErrorKind::CodeOutOfRange { .. }
        ));
    }

    #[test]
    fn test_error_span_points_at_token() {
        let err = parse_entry(4, "7 0007 Name").unwrap_err();
        assert_eq!(err.line_number, 4);
        assert_eq!(err.line, "7 0007 Name");
        assert_eq!(&err.line[err.span.clone()], "0007");
    }

    #[test]
    fn test_error_line_excludes_terminator() {
        let err = parse_entry(1, "7 0x0007\n").unwrap_err();
        assert_eq!(err.line, "7 0x0007");
        assert_eq!(err.span, 8..8);
    }
}
