//! Comment-stripped escaping of shader source text.

/// Result of escaping one shader source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedSource {
    /// The stripped source, one quoted literal segment per retained line.
    ///
    /// Each segment is `"<line>\n"` (with a literal backslash-n escape before
    /// the closing quote) followed by a real newline, so the emitted literal
    /// stays readable when spread over multiple source lines.
    pub text: String,
    /// Length of the stripped-but-unescaped text, one newline per retained
    /// line included. This is the number of characters the shader string
    /// occupies at runtime; quoting and escape markers do not count.
    pub true_length: usize,
}

/// Strips and escapes shader source text for embedding as a C string literal.
///
/// Blank lines are dropped. Lines whose first two characters are `//` are
/// dropped as whole-line comments; the check is on the literal first two
/// characters, so indented comments are kept.
pub fn escape_source(source: &str) -> EscapedSource {
    let mut text = String::new();
    let mut true_length = 0;
    for line in source.lines() {
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        text.push('"');
        text.push_str(line);
        text.push_str("\\n\"\n");
        true_length += line.len() + 1;
    }
    EscapedSource { text, true_length }
}
