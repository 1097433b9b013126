use crate::args::OutputFormat;
use anyhow::Result;
use orgmirror_runtime::{Config, resolve_data_path};
use serde_json::json;

pub fn handle(data_dir: Option<&str>, format: OutputFormat) -> Result<()> {
    let data_path = resolve_data_path(data_dir)?;
    let config = Config::load_from(&data_path.join("config.toml"))?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "dataDir": data_path,
                    "config": config,
                }))?
            );
        }
        OutputFormat::Plain => {
            println!("Data directory: {}", data_path.display());
            if config.orgs.is_empty() {
                println!("No orgs configured.");
            }
            for (name, org) in &config.orgs {
                println!("{}  {}  ({} objects)", name, org.endpoint_url, org.objects.len());
            }
        }
    }

    Ok(())
}
