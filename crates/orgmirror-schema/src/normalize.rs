use crate::extract::extras_for;
use orgmirror_types::{CanonicalSchema, FieldDescriptor, ObjectSchema, RawObjectDescribe};

/// Normalize a batch of describe records into a canonical schema.
///
/// Pure and total: no I/O, no shared state, and no failure mode over
/// well-formed input. An empty batch yields an empty schema; an object
/// with no fields yields a present-but-empty entry. Equal inputs
/// produce equal (and identically serialized) outputs regardless of
/// record order.
pub fn normalize(describes: &[RawObjectDescribe]) -> CanonicalSchema {
    let mut schema = CanonicalSchema::new();

    for describe in describes {
        let mut fields = ObjectSchema::new();

        for raw in &describe.fields {
            let extras = extras_for(raw);
            let descriptor = FieldDescriptor {
                name: raw.name.clone(),
                label: raw.label.clone(),
                field_type: raw.field_type.clone(),
                size: raw.length,
                target: extras.target,
                values: extras.values,
            };

            // Duplicate field names overwrite the earlier entry. The
            // vendor is not expected to emit duplicates; failing here
            // would upgrade bad metadata into a lost schema.
            fields.insert(descriptor.name.clone(), descriptor);
        }

        // Same last-write-wins policy at the object level.
        schema.insert_object(describe.name.clone(), fields);
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn describes(value: serde_json::Value) -> Vec<RawObjectDescribe> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_account_scenario() {
        let input = describes(json!([{
            "name": "Account",
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
        }]));

        let schema = normalize(&input);

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "Account": {
                    "Id": {"name": "Id", "label": "ID", "type": "id", "size": 18},
                    "Industry": {
                        "name": "Industry",
                        "label": "Industry",
                        "type": "picklist",
                        "size": 0,
                        "values": ["Tech", "Finance"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_empty_input_yields_empty_schema() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_object_with_no_fields_is_kept() {
        let input = describes(json!([{"name": "EmptyObject__c", "fields": []}]));

        let schema = normalize(&input);

        assert_eq!(schema.len(), 1);
        assert!(schema.object("EmptyObject__c").unwrap().is_empty());
    }

    #[test]
    fn test_reference_targets_copied_verbatim() {
        let input = describes(json!([{
            "name": "Case",
            "fields": [{
                "name": "OwnerId",
                "label": "Owner ID",
                "type": "reference",
                "length": 18,
                "referenceTo": ["User", "Group"]
            }]
        }]));

        let schema = normalize(&input);
        let owner = &schema.object("Case").unwrap()["OwnerId"];

        assert_eq!(
            owner.target,
            Some(vec!["User".to_string(), "Group".to_string()])
        );
        assert_eq!(owner.values, None);
    }

    #[test]
    fn test_unknown_type_tag_passes_through() {
        let input = describes(json!([{
            "name": "Account",
            "fields": [{
                "name": "Shape__c",
                "label": "Shape",
                "type": "holographic",
                "length": 42
            }]
        }]));

        let schema = normalize(&input);
        let field = &schema.object("Account").unwrap()["Shape__c"];

        assert_eq!(field.field_type, "holographic");
        assert_eq!(field.size, Some(42));
        assert_eq!(field.target, None);
        assert_eq!(field.values, None);
    }

    #[test]
    fn test_missing_length_maps_to_none_not_zero() {
        let input = describes(json!([{
            "name": "Account",
            "fields": [
                {"name": "IsDeleted", "label": "Deleted", "type": "boolean"},
                {"name": "Site", "label": "Site", "type": "string", "length": 0}
            ]
        }]));

        let schema = normalize(&input);
        let account = schema.object("Account").unwrap();

        assert_eq!(account["IsDeleted"].size, None);
        assert_eq!(account["Site"].size, Some(0));
    }

    #[test]
    fn test_duplicate_field_name_last_write_wins() {
        let input = describes(json!([{
            "name": "Account",
            "fields": [
                {"name": "Status", "label": "Old Status", "type": "string", "length": 40},
                {"name": "Status", "label": "Status", "type": "picklist", "length": 0,
                 "picklistValues": [{"value": "Open"}]}
            ]
        }]));

        let schema = normalize(&input);
        let account = schema.object("Account").unwrap();

        assert_eq!(account.len(), 1);
        assert_eq!(account["Status"].label, "Status");
        assert_eq!(account["Status"].values, Some(vec!["Open".to_string()]));
    }

    #[test]
    fn test_duplicate_object_name_overwrites_not_merges() {
        let input = describes(json!([
            {
                "name": "Account",
                "fields": [{"name": "Id", "label": "ID", "type": "id", "length": 18}]
            },
            {
                "name": "Account",
                "fields": [{"name": "Name", "label": "Name", "type": "string", "length": 255}]
            }
        ]));

        let schema = normalize(&input);
        let account = schema.object("Account").unwrap();

        assert_eq!(account.len(), 1);
        assert!(account.contains_key("Name"));
        assert!(!account.contains_key("Id"));
    }

    #[test]
    fn test_normalize_is_deterministic_and_idempotent_in_effect() {
        let input = describes(json!([
            {"name": "Contact", "fields": [
                {"name": "Email", "label": "Email", "type": "email", "length": 80}
            ]},
            {"name": "Account", "fields": [
                {"name": "Name", "label": "Name", "type": "string", "length": 255}
            ]}
        ]));

        let first = normalize(&input);
        let second = normalize(&input);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        // Object order in the input does not affect the output.
        let mut reversed = input.clone();
        reversed.reverse();
        assert_eq!(normalize(&reversed), first);
    }
}
