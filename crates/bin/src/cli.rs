//! CLI argument definitions for the aiguide binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// aiguide chat server
#[derive(Parser, Debug)]
#[command(name = "aiguide")]
#[command(about = "aiguide: find the right AI tool for the job")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the aiguide server
    Serve(ServeArgs),
    /// Check health of a running aiguide server
    Health(HealthArgs),
    /// Print the keyword catalog
    Catalog(CatalogArgs),
}

/// Arguments for the serve command
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "AIGUIDE_PORT")]
    pub port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "AIGUIDE_HOST")]
    pub host: String,

    /// Secret used to sign session tokens.
    /// When unset a random key is generated and tokens do not survive a restart.
    #[arg(long, env = "AIGUIDE_TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: Option<String>,

    /// Session token lifetime in days
    #[arg(long, default_value_t = aiguide::constants::DEFAULT_TOKEN_TTL_DAYS, env = "AIGUIDE_TOKEN_TTL_DAYS")]
    pub token_ttl_days: u64,

    #[command(flatten)]
    pub catalog: CatalogSource,

    /// Seed for tool selection, for reproducible demos
    #[arg(long, env = "AIGUIDE_SEED")]
    pub seed: Option<u64>,
}

/// Where the keyword catalog comes from
#[derive(clap::Args, Debug)]
pub struct CatalogSource {
    /// JSON catalog file. The built-in table is used when omitted.
    #[arg(long = "catalog", env = "AIGUIDE_CATALOG")]
    pub path: Option<PathBuf>,
}

/// Arguments for the health command
#[derive(clap::Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the server to check
    #[arg(long, default_value = "http://127.0.0.1:3000", env = "AIGUIDE_URL")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout: u64,
}

/// Arguments for the catalog command
#[derive(clap::Args, Debug)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub catalog: CatalogSource,

    /// Output format
    #[arg(short, long, default_value = "human")]
    pub format: Format,
}

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Human,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}
