//! Storage and display encodings for ingredient lists.
//!
//! Stores keep ingredients in a single text column as a JSON array. Rows
//! written by older delimiter-based tooling are still readable: anything that
//! does not decode as a JSON array is returned as one ingredient.

/// Separator used when an ingredient list is shown as editable text.
pub const DISPLAY_SEPARATOR: &str = ", ";

/// Encode ingredients for the text column.
pub fn encode(ingredients: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(ingredients).unwrap_or_else(|_| "[]".to_string())
}

/// Decode the text column back into an ordered list.
pub fn decode(stored: &str) -> Vec<String> {
    match serde_json::from_str::<serde_json::Value>(stored) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Ok(serde_json::Value::String(s)) => vec![s],
        _ => {
            tracing::debug!("Ingredients column is not a JSON array, keeping raw value");
            vec![stored.to_string()]
        }
    }
}

/// Join ingredients into one editable string.
pub fn to_display(ingredients: &[String]) -> String {
    ingredients.join(DISPLAY_SEPARATOR)
}

/// Split an editable string back into ingredients, dropping blanks.
pub fn from_display(text: &str) -> Vec<String> {
    text.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_encode_decode_preserves_order() {
        let items = strings(&["a", "b", "c"]);
        assert_eq!(decode(&encode(&items)), items);
    }

    #[test]
    fn test_encode_decode_keeps_commas() {
        let items = strings(&["salt, to taste", "2 cups flour"]);
        assert_eq!(decode(&encode(&items)), items);
    }

    #[test]
    fn test_decode_wraps_non_json() {
        assert_eq!(decode("salt, pepper"), strings(&["salt, pepper"]));
    }

    #[test]
    fn test_decode_wraps_json_string_scalar() {
        assert_eq!(decode("\"butter\""), strings(&["butter"]));
    }

    #[test]
    fn test_display_round_trip() {
        let items = strings(&["egg", "milk", "flour"]);
        let text = to_display(&items);
        assert_eq!(text, "egg, milk, flour");
        assert_eq!(from_display(&text), items);
    }

    #[test]
    fn test_from_display_drops_blank_tokens() {
        assert_eq!(from_display(" egg ,, milk , "), strings(&["egg", "milk"]));
        assert!(from_display("").is_empty());
    }
}
