//! # String Utilities

use core::fmt::Write;

/// Convert bytes to a string, replacing invalid UTF-8 with ``U+FFFD``.
///
/// Valid input is reused without copying.
pub fn string_from_utf8_lossy(v: Vec<u8>) -> String {
    String::from_utf8(v).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Render a token's bytes for human inspection.
///
/// Invalid UTF-8 becomes ``U+FFFD``; control characters are escaped,
/// so every rendered token sits on one line.
pub fn render_token(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            let _ = write!(out, "\\u{{{:04x}}}", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}
