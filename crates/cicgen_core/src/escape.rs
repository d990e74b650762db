//! Quoting transform applied to registry names before they land in a C string literal.

use std::borrow::Cow;

/// Escape every double quote in `name` with a backslash.
///
/// Only `"` is touched. Backslashes and every other character pass through unchanged, so a name
/// without a double quote is returned as-is without allocating.
///
/// ## Examples
/// ```rust
/// use cicgen_core::escape_name;
///
/// assert_eq!(escape_name(r#"He said "hi""#), r#"He said \"hi\""#);
/// assert_eq!(escape_name(r"C:\path"), r"C:\path");
/// ```
pub fn escape_name(name: &str) -> Cow<'_, str> {
    if !name.contains('"') {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + name.matches('"').count());
    for ch in name.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}
