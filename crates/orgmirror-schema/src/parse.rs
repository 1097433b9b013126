use orgmirror_types::RawObjectDescribe;
use serde_json::Value;

/// Parse describe records out of a JSON payload.
///
/// Accepts the three shapes describe data shows up in:
/// - a single describe object,
/// - an array of describe objects (the raw batch response),
/// - a map keyed by object name (the shape the review UI exchanges).
pub fn describes_from_value(value: &Value) -> serde_json::Result<Vec<RawObjectDescribe>> {
    match value {
        Value::Array(_) => serde_json::from_value(value.clone()),
        Value::Object(map) if map.contains_key("name") => {
            serde_json::from_value(value.clone()).map(|describe| vec![describe])
        }
        Value::Object(map) => map
            .values()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect(),
        other => serde_json::from_value(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_array_payload() {
        let value = json!([
            {"name": "Account", "fields": []},
            {"name": "Contact", "fields": []}
        ]);

        let describes = describes_from_value(&value).unwrap();
        assert_eq!(describes.len(), 2);
        assert_eq!(describes[0].name, "Account");
    }

    #[test]
    fn test_parses_single_object_payload() {
        let value = json!({"name": "Account", "fields": []});

        let describes = describes_from_value(&value).unwrap();
        assert_eq!(describes.len(), 1);
        assert_eq!(describes[0].name, "Account");
    }

    #[test]
    fn test_parses_name_keyed_map_payload() {
        let value = json!({
            "Account": {"name": "Account", "fields": []},
            "Contact": {"name": "Contact", "fields": []}
        });

        let mut names: Vec<String> = describes_from_value(&value)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Account", "Contact"]);
    }

    #[test]
    fn test_rejects_non_describe_payload() {
        assert!(describes_from_value(&json!(42)).is_err());
        assert!(describes_from_value(&json!({"Account": {"fields": []}})).is_err());
    }
}
