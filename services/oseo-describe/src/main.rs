//! OpenSearch EO parameter describer
//!
//! Prints the query parameters an OpenSearch EO endpoint advertises, or
//! checks a single query value against them.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use oseo_describe::config::ServiceConfig;
use oseo_describe::render;

/// OpenSearch EO parameter describer
#[derive(Parser, Debug)]
#[command(name = "oseo-describe")]
#[command(about = "Describe and check OpenSearch EO query parameters")]
struct Args {
    /// Service configuration file (YAML)
    #[arg(short, long, default_value = "config/oseo.yaml", env = "OSEO_CONFIG")]
    config: PathBuf,

    /// Override the maximum records per page (0 = unbounded)
    #[arg(long, env = "OSEO_MAX_RECORDS_PER_PAGE")]
    max_records_per_page: Option<i64>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parameter catalog as JSON
    List {
        /// Qualify native OpenSearch parameters as os:key
        #[arg(long)]
        qualify_native: bool,
    },
    /// Parse a value for a parameter, given its wire name
    Check {
        /// Parameter wire name, e.g. geo:lat or count
        name: String,
        /// Raw query-string value
        value: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Json,
    Pretty,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args);

    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // Logs go to stderr so stdout stays clean JSON
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    match args.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn run(args: Args) -> Result<()> {
    let output_crs =
        oseo_params::init_output_crs().context("Failed to resolve the output CRS")?;

    let qualify_native = matches!(args.command, Command::List { qualify_native: true });
    let config = ServiceConfig::load_from_file(&args.config)?
        .with_overrides(args.max_records_per_page, qualify_native)?;

    info!(
        maximum_records_per_page = config.maximum_records_per_page,
        output_crs = %output_crs.code,
        "Configuration ready"
    );

    match args.command {
        Command::List { .. } => {
            let catalog = render::catalog(&config, &output_crs.urn());
            let json = serde_json::to_string_pretty(&catalog)?;
            println!("{}", json);
        }
        Command::Check { name, value } => {
            let parsed = render::check_value(&config, &name, &value)
                .with_context(|| format!("Rejected {}={}", name, value))?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
    }

    Ok(())
}
