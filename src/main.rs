use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clusterspec::AppError;
use clusterspec::app::config::load_config;
use clusterspec::app::logging::init_logging;

#[derive(Parser)]
#[command(name = "clusterspec")]
#[command(version)]
#[command(
    about = "Resolve cluster specifications into OpenAPI schema documents",
    long_about = "Resolve cluster specifications into OpenAPI schema documents.\n\n\
                  A SPEC is one of `version:<tag>` (e.g. version:v1.11.7), \
                  `file:<path>` or `url:<api-server>`."
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or save the OpenAPI schema document
    Openapi {
        /// Cluster specification, e.g. version:v1.11.7
        spec: String,
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the resource the specification refers to
    Resource {
        /// Cluster specification, e.g. file:swagger.json
        spec: String,
    },
    /// Print the Kubernetes version of the specification
    Version {
        /// Cluster specification, e.g. version:v1.11.7
        spec: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Openapi { spec, output } => {
            let schema = clusterspec::resolve(&spec, &config)?.openapi()?;
            match output {
                Some(path) => fs::write(path, &schema)?,
                None => io::stdout().write_all(&schema)?,
            }
        }
        Commands::Resource { spec } => {
            println!("{}", clusterspec::resolve(&spec, &config)?.resource());
        }
        Commands::Version { spec } => {
            println!("{}", clusterspec::resolve(&spec, &config)?.version()?);
        }
    }
    Ok(())
}
