// Type-conditional attribute extraction, keyed by vendor type tag.
//
// The tag vocabulary is open: the vendor ships new type tags without
// notice. Tags absent from the table normalize with only the four base
// attributes, so the pipeline stays total with no code change.

use orgmirror_types::RawField;

/// Type-specific attributes contributed by an extractor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldExtras {
    pub target: Option<Vec<String>>,
    pub values: Option<Vec<String>>,
}

type Extractor = fn(&RawField) -> FieldExtras;

const EXTRACTORS: &[(&str, Extractor)] = &[
    ("reference", extract_reference),
    ("picklist", extract_picklist),
];

/// Look up the extractor for a field's type tag and run it.
///
/// Returns empty extras for any tag the table does not know.
pub fn extras_for(field: &RawField) -> FieldExtras {
    EXTRACTORS
        .iter()
        .find(|(tag, _)| *tag == field.field_type)
        .map(|(_, extract)| extract(field))
        .unwrap_or_default()
}

/// Copy reference targets verbatim. Polymorphic references carry more
/// than one target; all entries are kept in the given order.
fn extract_reference(field: &RawField) -> FieldExtras {
    FieldExtras {
        target: Some(field.reference_to.clone()),
        values: None,
    }
}

/// Flatten a picklist value set to just the entry values, preserving
/// the order the vendor declared them in.
fn extract_picklist(field: &RawField) -> FieldExtras {
    FieldExtras {
        target: None,
        values: Some(
            field
                .picklist_values
                .iter()
                .map(|entry| entry.value.clone())
                .collect(),
        ),
    }
}
