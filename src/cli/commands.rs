//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentra")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Base URL of the mood classifier
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Save a journal entry
    Write {
        /// Entry text
        text: Option<String>,

        /// Mood from 1 (rough) to 5 (great)
        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Show all entries, newest first
    List,

    /// Show the mood trend of the last 7 entries
    Trend,

    /// Classify text with the remote mood classifier
    Analyze {
        /// Text to classify
        text: String,

        /// Open the detailed view after a successful analysis
        #[arg(long)]
        details: bool,
    },

    /// Show the detailed view of the last analysis handed off
    Details,

    /// Interactive journal shell
    Shell,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
