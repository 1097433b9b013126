use crate::args::OutputFormat;
use anyhow::{Context, Result, bail};
use is_terminal::IsTerminal;
use orgmirror_schema::{describes_from_value, normalize};
use orgmirror_types::{CanonicalSchema, FieldDescriptor, RawObjectDescribe};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

pub fn handle(files: &[PathBuf], format: OutputFormat) -> Result<()> {
    if files.is_empty() {
        bail!("no input files; pass one or more describe JSON files");
    }

    let mut describes: Vec<RawObjectDescribe> = Vec::new();
    for file in files {
        describes.extend(load_describes(file)?);
    }

    let schema = normalize(&describes);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schema)?),
        OutputFormat::Plain => print_schema(&schema),
    }

    Ok(())
}

pub(crate) fn load_describes(file: &Path) -> Result<Vec<RawObjectDescribe>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;
    describes_from_value(&value)
        .with_context(|| format!("{} is not a describe payload", file.display()))
}

fn print_schema(schema: &CanonicalSchema) {
    let color = std::io::stdout().is_terminal();

    for (object_name, fields) in schema.objects() {
        if color {
            println!("{}", object_name.bold());
        } else {
            println!("{}", object_name);
        }

        if fields.is_empty() {
            println!("  (no fields)");
        }
        for field in fields.values() {
            println!("  {}", format_field(field));
        }
        println!();
    }
}

fn format_field(field: &FieldDescriptor) -> String {
    let size = match field.size {
        Some(size) => format!("({})", size),
        None => String::new(),
    };
    let mut line = format!("{}  {}{}", field.name, field.field_type, size);

    if let Some(target) = &field.target {
        line.push_str(&format!("  -> {}", target.join(" | ")));
    }
    if let Some(values) = &field.values {
        line.push_str(&format!("  [{}]", values.join(", ")));
    }
    line
}
