//! kibun - lexicon-based sentiment analysis from the command line

use clap::Parser;
use kibun_cli::commands::{self, Commands};

/// Lexicon-based sentiment analysis
#[derive(Debug, Parser)]
#[command(name = "kibun", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Analyze(args) => args.execute(),
        Commands::History(args) => args.execute(),
        Commands::List { subcommand } => {
            commands::list::execute(subcommand);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
