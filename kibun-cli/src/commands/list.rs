//! List command implementation

use super::ListCommands;

/// Execute a list subcommand
pub fn execute(subcommand: &ListCommands) {
    match subcommand {
        ListCommands::Providers => {
            println!("local        In-process lexicon scorer (default)");
            println!("huggingface  HuggingFace inference endpoint (requires API key)");
        }
        ListCommands::Formats => {
            println!("text  One labeled line per analyzed text (default)");
            println!("json  JSON array of reports with scores");
        }
    }
}
