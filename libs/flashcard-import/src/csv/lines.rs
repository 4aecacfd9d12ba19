//! Quote-aware splitting of CSV text into logical lines.

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split text into logical lines.
///
/// A newline inside a quoted field belongs to the field, so one logical line
/// can span several physical ones. Quote characters are kept so the row
/// parser can still see which fields were quoted. Expects `\n` line endings.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote, stays inside the field.
                chars.next();
                current.push_str("\"\"");
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '\n' if !in_quotes => lines.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
