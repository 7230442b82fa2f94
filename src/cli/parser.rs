use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchlog
#[derive(Parser)]
#[command(
    name = "punchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Derive payroll metrics from punch-clock time logs: worked hours, lateness, and overtime",
    long_about = None
)]
pub struct Cli {
    /// Override the dataset directory (useful for tests or ad-hoc exports)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and dataset directory
    Init {
        /// Custom dataset directory (absolute, or relative to the config dir)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List derived metrics for time logs
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (default: current month)"
        )]
        period: Option<String>,

        #[arg(long, help = "Restrict to one user id")]
        user: Option<i64>,

        #[arg(long = "details", help = "Show per-log breakdown (breaks, shifts, device/location)")]
        details: bool,
    },

    /// Export derived metrics
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(
            long,
            value_name = "COLS",
            help = "Comma-separated CSV column visibility list (e.g. date,worked,overtime)"
        )]
        columns: Option<String>,

        #[arg(long, help = "Restrict to one user id")]
        user: Option<i64>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Validate an overtime request against the computed ceiling
    Overtime {
        /// Time log id the request is tied to
        #[arg(long)]
        log: i64,

        /// Requested overtime, in hours
        #[arg(long)]
        hours: f64,

        /// Why the overtime was worked
        #[arg(long)]
        reason: Option<String>,
    },
}
