use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        eprintln!("No command given. Try `orgmirror normalize <files...>` or `orgmirror --help`.");
        return Ok(());
    };

    match command {
        Commands::Normalize { files } => handlers::normalize::handle(&files, cli.format),
        Commands::Inspect { file } => handlers::inspect::handle(&file, cli.format),
        Commands::Config => handlers::config::handle(cli.data_dir.as_deref(), cli.format),
    }
}
