use crate::source::SourceKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rStatusCheck
#[derive(Parser)]
#[command(
    name = "rstatuscheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check a shared status sheet for members who did not submit, and email the result",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Check the sheet for missing status entries and send notifications
    Check {
        /// Sheet path or http(s) URL (.csv, .xls, .xlsx); defaults to EXCEL_URL
        source: Option<String>,

        /// Date to check (YYYY-MM-DD); defaults to TARGET_DATE, then yesterday
        #[arg(long, short = 'd', value_name = "DATE")]
        date: Option<String>,

        /// Print the emails instead of sending them
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Source type, when it cannot be told from the extension
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<SourceKind>,

        /// Also write the per-member result to FILE (.csv, .json or .xlsx)
        #[arg(long, value_name = "FILE")]
        export: Option<String>,

        /// Overwrite the export file without confirmation
        #[arg(long, short = 'f', requires = "export")]
        force: bool,
    },

    /// Show which sheet column was detected for each role
    Columns {
        /// Sheet path or http(s) URL; defaults to EXCEL_URL
        source: Option<String>,

        /// Source type, when it cannot be told from the extension
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<SourceKind>,
    },

    /// Show or edit the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration (password masked)")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
