//! Field splitting for a single logical CSV line.

/// Fields of one CSV record, trimmed and unquoted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Field at `index`, or `""` past the end of the row.
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

/// Split a logical line on commas that are outside quotes.
pub fn parse_row(line: &str) -> Row {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push_str("\"\"");
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => fields.push(clean_field(&std::mem::take(&mut current))),
            _ => current.push(ch),
        }
    }
    fields.push(clean_field(&current));

    Row { fields }
}

/// Trim a raw field, unwrapping it if it is fully quoted.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let quoted = trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"');
    if quoted {
        trimmed[1..trimmed.len() - 1]
            .replace("\"\"", "\"")
            .trim()
            .to_string()
    } else {
        trimmed.to_string()
    }
}
