//! Field-level diffs for audit entries

use serde_json::Value;

/// Summarize which top-level fields differ between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes: Vec<String> = match (before, after) {
        (Value::Object(b), Value::Object(a)) => {
            let mut changes: Vec<String> = b
                .iter()
                .filter_map(|(key, old)| match a.get(key) {
                    Some(new) if new == old => None,
                    Some(new) => Some(format!("{}: {} -> {}", key, render(old), render(new))),
                    None => Some(format!("{}: {} -> (removed)", key, render(old))),
                })
                .collect();

            changes.extend(
                a.iter()
                    .filter(|(key, _)| !b.contains_key(*key))
                    .map(|(key, new)| format!("{}: (added) -> {}", key, render(new))),
            );
            changes
        }
        _ if before != after => vec![format!("{} -> {}", render(before), render(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(37).collect();
            format!("\"{}...\"", head)
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => match (fields.get("kind"), fields.get("id")) {
            // Category references render as "monthly#3"
            (Some(Value::String(kind)), Some(id)) => format!("{}#{}", kind, id),
            _ => format!("{{{} fields}}", fields.len()),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let v = json!({"name": "lunch", "cost": 1200});
        assert_eq!(generate_diff(&v, &v), None);
    }

    #[test]
    fn test_changed_fields() {
        let before = json!({"name": "lunch", "marked": false});
        let after = json!({"name": "brunch", "marked": true});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("name: \"lunch\" -> \"brunch\""));
        assert!(diff.contains("marked: false -> true"));
    }

    #[test]
    fn test_category_reference_rendering() {
        let before = json!({"category": {"kind": "fixed", "id": 1}});
        let after = json!({"category": {"kind": "monthly", "id": 3}});

        assert_eq!(
            generate_diff(&before, &after),
            Some("category: fixed#1 -> monthly#3".to_string())
        );
    }

    #[test]
    fn test_added_and_removed() {
        let before = json!({"category": null, "old": 1});
        let after = json!({"category": {"kind": "monthly", "id": 2}, "new": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("category: null -> monthly#2"));
        assert!(diff.contains("old: 1 -> (removed)"));
        assert!(diff.contains("new: (added) -> 2"));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
    }
}
