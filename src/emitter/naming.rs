//! Identifier and literal helpers for generated C++ code.

/// Normalize free-form text into a bare identifier fragment.
///
/// # Rules
/// 1. Trim leading/trailing whitespace
/// 2. Replace each space or tab with an underscore
/// 3. Strip any character that is not an ASCII letter or underscore
/// 4. Lowercase the result
///
/// Distinct inputs may normalize to the same fragment, and input with no
/// ASCII letters or whitespace normalizes to an empty string. Neither case
/// is detected here.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == ' ' || c == '\t' { '_' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Escape text for use inside a C++ double-quoted string literal.
///
/// `\`, `"` and line breaks are escaped; everything else is emitted
/// verbatim.
#[must_use]
pub fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}

/// Render `text` as `//` comments, the first line led by `lead`.
///
/// Every line of multi-line text gets its own `//` so the comment never
/// leaks into code. A trailing line break is dropped.
#[must_use]
pub fn line_comment(lead: &str, text: &str) -> String {
    let mut lines = text.lines();
    let mut out = format!("// {lead} {}", lines.next().unwrap_or_default());
    for line in lines {
        out.push_str("\n//");
        if !line.is_empty() {
            out.push(' ');
            out.push_str(line);
        }
    }
    out
}
