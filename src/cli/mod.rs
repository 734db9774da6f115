//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod shell;
pub mod view;

pub use commands::{Cli, Commands};
pub use output::{format_entry_list, format_trend_chart};
pub use view::TerminalView;
