//! CLI definition using clap

use std::path::PathBuf;

use busplan_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "busplan")]
#[command(version)]
#[command(about = "Shuttle bus allocation by route and pickup station")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Employee store directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Group employees by route and station and size the fleet
    Allocate {
        /// Read employees from this CSV instead of the employee store
        #[arg(long, short = 'e')]
        employees: Option<PathBuf>,

        /// Route details CSV (route_code, station_name, order)
        #[arg(long, short = 'r')]
        routes: Option<PathBuf>,

        /// Route rules TOML (families, overrides)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Only show these resolved routes (repeatable)
        #[arg(long = "route")]
        only_routes: Vec<String>,

        /// Also write the allocation to an Excel file
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// Import employees from a CSV file into the store
    Import {
        /// Path to CSV file (code, full_name, phone, route_code, station_name)
        file: PathBuf,

        /// Dry run - show what would be imported without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// List stored employees
    Employees {
        /// Only employees with this raw route code
        #[arg(long)]
        route: Option<String>,
    },

    /// Show the vehicle required for a headcount
    Size {
        /// Number of employees
        headcount: usize,
    },

    /// Print the effective route rules (configured file or built-in) as TOML
    Rules {
        /// Route rules TOML to show instead of the configured one
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set employee store directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set route details CSV
        #[arg(long)]
        set_routes: Option<PathBuf>,

        /// Set route rules TOML
        #[arg(long)]
        set_rules: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set employee lookup cache TTL in seconds
        #[arg(long)]
        set_cache_ttl: Option<u64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
