use clap::{Parser, Subcommand};

/// Command-line interface definition for rPresence
#[derive(Parser)]
#[command(
    name = "rpresence",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily presence, day status and weekly/monthly project statistics from punch entries",
    long_about = None
)]
pub struct Cli {
    /// Override the dataset file (JSON, or YAML with .yml/.yaml)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Freeze the clock at this instant (YYYY-MM-DD HH:MM[:SS])
    #[arg(global = true, long = "now", value_name = "DATETIME")]
    pub now: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(global = true, long = "json")]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace); defaults to RUST_LOG
    #[arg(global = true, long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Presence, status and project breakdown for a single day
    Day {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Statistics for the Monday-Sunday week containing DATE
    Week {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Statistics for the calendar month containing DATE
    Month {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Statistics for an explicit inclusive range
    Range {
        /// First day (YYYY-MM-DD)
        start: String,
        /// Last day (YYYY-MM-DD)
        end: String,
    },

    /// Sessions on different projects running at the same time
    Overlaps {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },
}
