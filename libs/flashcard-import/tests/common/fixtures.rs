//! Fixture builders for import tests.

use serde_json::json;

/// Generate a CSV document with a header and `num_cards` rows.
///
/// # Arguments
/// * `num_cards` - Number of data rows
/// * `quoted` - Whether every field is wrapped in quotes
pub fn sample_csv(num_cards: usize, quoted: bool) -> String {
    let mut out = String::from("Question,Answer\n");
    for i in 1..=num_cards {
        if quoted {
            out.push_str(&format!("\"Question {}?\",\"Answer {}.\"\n", i, i));
        } else {
            out.push_str(&format!("Question {}?,Answer {}.\n", i, i));
        }
    }
    out
}

/// Generate a bare JSON card array.
pub fn sample_json_array(num_cards: usize) -> String {
    let cards: Vec<_> = (1..=num_cards)
        .map(|i| json!({ "question": format!("Question {}?", i), "answer": format!("Answer {}.", i) }))
        .collect();
    serde_json::Value::Array(cards).to_string()
}

/// Generate a JSON collection object with explicit card ids.
pub fn sample_json_collection(title: &str, source: &str, created_at: &str, ids: &[&str]) -> String {
    let cards: Vec<_> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            json!({
                "id": id,
                "question": format!("Question {}?", i + 1),
                "answer": format!("Answer {}.", i + 1),
            })
        })
        .collect();

    json!({
        "title": title,
        "source": source,
        "createdAt": created_at,
        "cards": cards,
    })
    .to_string()
}
