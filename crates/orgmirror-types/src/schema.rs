use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized description of a single field, storage-agnostic.
///
/// `target` and `values` are type-conditional: `target` is present iff
/// `field_type` is "reference", `values` iff it is "picklist". Every
/// other tag carries only the four base attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    /// Declared length mapped from the raw describe. `None` means the
    /// vendor declared no length, which is not the same as zero.
    pub size: Option<u32>,
    /// Target object names for reference fields, order and multiplicity
    /// preserved (polymorphic references keep all entries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<String>>,
    /// Picklist values in the order the vendor declared them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// Field descriptors keyed by field name within one object.
pub type ObjectSchema = BTreeMap<String, FieldDescriptor>;

/// Canonical schema for a set of objects: object name -> object schema.
///
/// Backed by a BTreeMap so that equal inputs serialize byte-identically,
/// independent of the order objects were inserted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CanonicalSchema(BTreeMap<String, ObjectSchema>);

impl CanonicalSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object schema, overwriting any existing entry for the
    /// same object name (last write wins, no merge).
    pub fn insert_object(
        &mut self,
        name: impl Into<String>,
        fields: ObjectSchema,
    ) -> Option<ObjectSchema> {
        self.0.insert(name.into(), fields)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectSchema> {
        self.0.get(name)
    }

    pub fn objects(&self) -> impl Iterator<Item = (&String, &ObjectSchema)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
