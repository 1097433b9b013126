use crate::args::OutputFormat;
use anyhow::Result;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

pub fn handle(file: &Path, format: OutputFormat) -> Result<()> {
    let describes = super::normalize::load_describes(file)?;

    match format {
        OutputFormat::Json => {
            let summary: Vec<_> = describes
                .iter()
                .map(|describe| {
                    json!({
                        "name": describe.name,
                        "fieldCount": describe.fields.len(),
                        "types": type_tally(describe),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            for describe in &describes {
                println!("{}  {} fields", describe.name, describe.fields.len());
                for (tag, count) in type_tally(describe) {
                    println!("  {:<16} {}", tag, count);
                }
            }
        }
    }

    Ok(())
}

/// Count fields per vendor type tag, in stable (sorted) order.
fn type_tally(describe: &orgmirror_types::RawObjectDescribe) -> BTreeMap<String, usize> {
    let mut tally = BTreeMap::new();
    for field in &describe.fields {
        *tally.entry(field.field_type.clone()).or_insert(0) += 1;
    }
    tally
}
