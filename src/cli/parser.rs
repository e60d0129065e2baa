use clap::{Parser, Subcommand};

/// Command-line interface definition for boathours
/// Department hours by boat, from the time-clock database
#[derive(Parser)]
#[command(
    name = "boathours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Department hours by boat: aggregate time-clock punches and send the report by email and XLSX",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a local copy of the store)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (defaults only: no config file, no environment)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file and create the time-clock schema
    Init,

    /// Build the report and distribute it
    Report {
        #[arg(
            long = "as-of",
            value_name = "YYYY-MM-DD",
            help = "Evaluate the report at the end of this day instead of now"
        )]
        as_of: Option<String>,

        #[arg(long = "no-mail", help = "Do not send the report by email")]
        no_mail: bool,

        #[arg(long = "no-xlsx", help = "Do not write the XLSX spreadsheet")]
        no_xlsx: bool,

        #[arg(
            long = "out-dir",
            value_name = "DIR",
            help = "Directory for the XLSX file (overrides output_dir)"
        )]
        out_dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing spreadsheet")]
        force: bool,
    },

    /// Show or check the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate configuration and mail addresses")]
        check: bool,
    },
}
