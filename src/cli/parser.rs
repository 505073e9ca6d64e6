use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPoolBoard
/// CLI application to follow pool progress from a work-tracking sheet
#[derive(Parser)]
#[command(
    name = "rpoolboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Live pool progress from a work-tracking sheet: fair-share targets, worker status, overdue detection",
    long_about = None
)]
pub struct Cli {
    /// Override the input CSV (sheet export) path
    #[arg(global = true, long = "input", short = 'i', value_name = "CSV")]
    pub input: Option<String>,

    /// Evaluate as of this instant instead of the local clock (DD/MM/YYYY HH:MM[:SS] or ISO)
    #[arg(global = true, long = "now", value_name = "TIMESTAMP")]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values")]
        check: bool,

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

    /// Show the progress block of the current pool (or a given one)
    Status {
        /// Pool id ("<Pool Name> - <Tab>"); defaults to the most recent pool
        #[arg(long = "pool", short = 'p')]
        pool: Option<String>,

        #[arg(long = "all", help = "Also list the team lead and helpers")]
        all: bool,
    },

    /// List pools, most recent first
    List {
        #[arg(
            long = "limit",
            short = 'n',
            help = "Number of previous pools to show (default from config)"
        )]
        limit: Option<usize>,
    },

    /// Export pool summaries
    Export {
        /// Output format; inferred from the file extension when omitted
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "pool", short = 'p', help = "Export only this pool id")]
        pool: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
