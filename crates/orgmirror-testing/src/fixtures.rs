//! Canned describe payloads shared across test suites.

use orgmirror_types::RawObjectDescribe;
use serde_json::json;

/// Account with an id field and a picklist field.
pub fn account_describe() -> RawObjectDescribe {
    serde_json::from_value(json!({
        "name": "Account",
        "label": "Account",
        "fields": [
            {"name": "Id", "label": "ID", "type": "id", "length": 18},
            {
                "name": "Industry",
                "label": "Industry",
                "type": "picklist",
                "length": 0,
                "picklistValues": [{"value": "Tech"}, {"value": "Finance"}]
            }
        ]
    }))
    .expect("account fixture is valid")
}

/// Contact with a plain field and a polymorphic reference field.
pub fn contact_describe() -> RawObjectDescribe {
    serde_json::from_value(json!({
        "name": "Contact",
        "label": "Contact",
        "fields": [
            {"name": "Email", "label": "Email", "type": "email", "length": 80},
            {
                "name": "OwnerId",
                "label": "Owner ID",
                "type": "reference",
                "length": 18,
                "referenceTo": ["User", "Group"]
            }
        ]
    }))
    .expect("contact fixture is valid")
}

/// An object with zero fields. Normalizes to a present-but-empty entry.
pub fn empty_describe(name: &str) -> RawObjectDescribe {
    serde_json::from_value(json!({"name": name, "fields": []}))
        .expect("empty fixture is valid")
}

/// Raw describe JSON as a string, for CLI tests writing input files.
pub fn describe_file_json() -> String {
    serde_json::to_string_pretty(&[account_describe(), contact_describe()])
        .expect("fixtures serialize")
}
