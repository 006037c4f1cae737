use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for jardinlog
/// CLI application to log garden maintenance jobs backed by SQLite
#[derive(Parser)]
#[command(
    name = "jardinlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Registro de trabajos de mantenimiento de espacios verdes: altas, listados e informes CSV/XLSX/PDF",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a maintenance job
    Add {
        /// Date of the job (YYYY-MM-DD)
        date: String,

        /// Location (delegacion, farmacia, optica, otro)
        #[arg(long = "loc", help = "Location: delegacion, farmacia, optica, otro")]
        location: String,

        /// Duration in minutes
        #[arg(long = "min", help = "Duration in minutes")]
        duration: u32,

        /// Free-text description of the work done
        #[arg(long = "desc", default_value = "", help = "Job description")]
        description: String,

        /// Tags (repeatable)
        #[arg(long = "tag", help = "Attach a tag (can be repeated)")]
        tags: Vec<String>,

        /// Photos as before:PATH or after:PATH (repeatable)
        #[arg(
            long = "photo",
            help = "Attach a photo reference: before:PATH or after:PATH (can be repeated)"
        )]
        photos: Vec<String>,
    },

    /// Delete a job by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List jobs page by page, with monthly totals
    List {
        #[arg(long, help = "Page to show (10 jobs per page by default)")]
        page: Option<usize>,
    },

    /// Show one job in full detail
    Show { id: i64 },

    /// Export the full job list as a report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "DIR",
            help = "Directory for the auto-named report file (default: current directory)"
        )]
        out: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Exact destination path (overrides --out)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the destination if it exists")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
