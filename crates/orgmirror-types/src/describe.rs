use serde::{Deserialize, Serialize};

/// Raw object metadata as returned by the vendor describe endpoint.
///
/// The wire format carries far more attributes than we model here
/// (createable, queryable, urls, ...); serde drops the rest. Only the
/// attributes the normalizer consumes are bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObjectDescribe {
    /// API name of the object (e.g. "Account", "Custom_Object__c").
    pub name: String,
    /// Human-readable label, when the endpoint provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Field records in declaration order.
    #[serde(default)]
    pub fields: Vec<RawField>,
}

/// A single field record inside a describe response.
///
/// `field_type` is an open vendor vocabulary ("reference", "picklist",
/// "string", "id", ...). New tags appear without notice, so nothing in
/// this crate treats the set as closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    /// Declared storage length. Absent is distinct from zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Target object names for reference-typed fields. Polymorphic
    /// references carry more than one entry; order is meaningful.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_to: Vec<String>,
    /// Value set for picklist-typed fields, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub picklist_values: Vec<PicklistEntry>,
}

/// One entry of a picklist value set. Entries carry extra attributes on
/// the wire (active, defaultValue, ...) but only `value` survives
/// normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicklistEntry {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}
