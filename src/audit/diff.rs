//! Diff generation for audit entries
//!
//! Produces a short human-readable summary of the fields that changed
//! between two JSON representations of an entity.

use serde_json::Value;

/// Fields excluded from diff summaries
const IGNORED_FIELDS: &[&str] = &["updated_at", "password_hash"];

/// Generate a human-readable diff between two JSON objects
///
/// Returns `None` when nothing of interest changed. Timestamps and password
/// hashes are excluded.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (before_map, after_map) = match (before.as_object(), after.as_object()) {
        (Some(b), Some(a)) => (b, a),
        _ => return None,
    };

    let mut changes = Vec::new();

    for (key, before_value) in before_map {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }

        match after_map.get(key) {
            Some(after_value) if after_value != before_value => {
                changes.push(format!(
                    "{}: {} -> {}",
                    key,
                    format_value(before_value),
                    format_value(after_value)
                ));
            }
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_value))),
            _ => {}
        }
    }

    for (key, after_value) in after_map {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if !before_map.contains_key(key) {
            changes.push(format!("{}: (added) {}", key, format_value(after_value)));
        }
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let v = json!({"name": "Scanner", "status": "active"});
        assert_eq!(generate_diff(&v, &v), None);
    }

    #[test]
    fn test_changed_field() {
        let before = json!({"name": "Scanner", "status": "active"});
        let after = json!({"name": "Scanner", "status": "written-off"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "status: active -> written-off");
    }

    #[test]
    fn test_ignores_timestamps_and_hashes() {
        let before = json!({"updated_at": "2024-01-01", "password_hash": "a"});
        let after = json!({"updated_at": "2024-06-01", "password_hash": "b"});

        assert_eq!(generate_diff(&before, &after), None);
    }

    #[test]
    fn test_non_objects_yield_none() {
        assert_eq!(generate_diff(&json!(1), &json!(2)), None);
    }
}
