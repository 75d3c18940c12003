use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert attendance login/logout exports into a reference spreadsheet layout",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Fill a reference spreadsheet with login/logout times from a source export
    Convert {
        /// Attendance export (xlsx, xls, ods or csv)
        #[arg(long, short = 's', value_name = "FILE")]
        source: String,

        /// Reference/template spreadsheet holding the employee roster
        #[arg(long, short = 'r', value_name = "FILE")]
        reference: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Dates to lay out (YYYY, YYYY-MM, YYYY-MM-DD or START:END); omit to use the reference header"
        )]
        range: Option<String>,

        /// Output file (default: suggested name in the current directory)
        #[arg(long, short = 'o', value_name = "FILE")]
        out: Option<String>,

        /// Write the progress log and counters as JSON
        #[arg(long, value_name = "FILE")]
        report: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Show how a reference spreadsheet will be read
    Inspect {
        /// Spreadsheet to inspect
        file: String,
    },
}
