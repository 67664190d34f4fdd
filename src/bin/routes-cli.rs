use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use route_registry::config::{load_config, ConfigError};
use route_registry::http::response::{ErrorBody, ResolvedRoute};
use route_registry::Registry;

#[derive(Parser)]
#[command(name = "routes-cli")]
#[command(about = "Inspect and resolve dashboard route names offline", long_about = None)]
struct Cli {
    /// Use the [routes] table from this config instead of the built-in routes
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List top-level route names
    List {
        /// List every leaf with its dotted name and path
        #[arg(short, long)]
        all: bool,
    },
    /// Resolve a symbolic name, e.g. `members.view 42`
    Resolve {
        name: String,
        args: Vec<String>,
    },
    /// Load and validate a config file
    Check { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let registry = match &cli.config {
        Some(path) => load_config(path)?.registry()?,
        None => Registry::dashboard(),
    };

    match cli.command {
        Commands::List { all: false } => print_json(&registry.top_level_names())?,
        Commands::List { all: true } => print_json(&registry.entries())?,
        Commands::Resolve { name, args } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            match registry.resolve(&name, &args) {
                Ok(path) => print_json(&ResolvedRoute { name, path })?,
                Err(e) => {
                    print_json(&ErrorBody::from(&e))?;
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Check { file } => match load_config(&file) {
            Ok(config) => {
                let registry = config.registry()?;
                println!(
                    "{}: ok ({} top-level names, {} routes)",
                    file.display(),
                    registry.top_level_names().len(),
                    registry.leaf_count()
                );
            }
            Err(ConfigError::Validation(errors)) => {
                eprintln!("{}: {} problem(s)", file.display(), errors.len());
                for err in errors {
                    eprintln!("  - {}", err);
                }
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
