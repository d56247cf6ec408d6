mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use onepassword::error::JsonError;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let vault = cli.vault.as_deref();
    let json = cli.json;

    let result = match &cli.command {
        Commands::Version => cli::version::run(json),

        Commands::Vaults => cli::vaults::run(),

        Commands::Get { item, fields } => cli::get::run(vault, item, fields),

        Commands::Value { item, field } => cli::value::run(vault, item, field, json),

        Commands::Username { item } => cli::value::run(vault, item, "username", json),

        Commands::Password { item } => cli::value::run(vault, item, "password", json),

        Commands::Uuid { item } => cli::value::run_uuid(vault, item, json),

        Commands::Document { item, output } => cli::document::run(vault, item, output.as_deref()),

        Commands::List { categories, tags } => cli::list::run(vault, categories, tags),
    };

    if let Err(e) = result {
        if json {
            let envelope = JsonError::from_error(&e);
            match serde_json::to_string(&envelope) {
                Ok(s) => eprintln!("{}", s),
                Err(_) => eprintln!("Error: {}", e),
            }
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}
