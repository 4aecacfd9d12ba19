//! Collection titles derived from file names.

/// Title used when nothing readable is left of the file name.
pub const FALLBACK_TITLE: &str = "Imported Flashcards";

/// Derive a human-readable title from a file name.
///
/// Drops the extension, turns runs of `_`/`-` into a single space and trims.
pub fn derive_title(file_name: &str) -> String {
    let base = strip_extension(file_name);

    let mut title = String::with_capacity(base.len());
    let mut in_separator = false;
    for ch in base.chars() {
        if ch == '_' || ch == '-' {
            if !in_separator {
                title.push(' ');
            }
            in_separator = true;
        } else {
            title.push(ch);
            in_separator = false;
        }
    }

    let title = title.trim();
    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title.to_string()
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        // A bare trailing dot is not an extension.
        Some(idx) if idx + 1 < file_name.len() => &file_name[..idx],
        _ => file_name,
    }
}
