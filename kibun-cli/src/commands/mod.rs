//! CLI command implementations

use clap::Subcommand;

pub mod analyze;
pub mod history;
pub mod list;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze the sentiment of text from arguments, files, or stdin
    Analyze(analyze::AnalyzeArgs),

    /// Show recorded analysis history
    History(history::HistoryArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available sentiment providers
    Providers,

    /// List available output formats
    Formats,
}
