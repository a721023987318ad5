//! Analyze command implementation

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kibun_api::{Analyzer, Config, UserRef};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when neither text nor --input given)
    pub text: Option<String>,

    /// Input files or patterns (supports glob); one analysis per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (defaults to the config file's `default_format`)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Sentiment provider to use
    #[arg(short, long, value_name = "NAME")]
    pub provider: Option<String>,

    /// User identifier recorded with history entries
    #[arg(short, long, value_name = "ID", default_value = "anonymous")]
    pub user: String,

    /// Append analyses to a JSON-lines history file
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One labeled line per analyzed text
    Text,
    /// JSON array of reports with scores
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file
    fn from_config_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => {
                Err(CliError::ConfigError(format!("unknown output format '{other}'")).into())
            }
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting sentiment analysis");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let analyzer = self.build_analyzer(&cli_config)?;
        let user = UserRef::new(self.user.clone());
        let texts = self.collect_texts()?;

        let mut formatter = self.make_formatter(&cli_config)?;
        for text in &texts {
            let report = analyzer
                .analyze_with(&user, text, self.provider.as_deref())
                .map_err(|e| CliError::AnalysisError(e.to_string()))?;
            formatter.format_report(&report)?;
        }
        formatter.finish()?;

        log::info!("Analyzed {} text(s)", texts.len());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Build the analyzer from the config file and CLI overrides
    fn build_analyzer(&self, cli_config: &CliConfig) -> Result<Analyzer> {
        let mut builder = Config::builder().lexicon(cli_config.analysis.lexicon.clone());

        let default_provider = self
            .provider
            .clone()
            .unwrap_or(cli_config.analysis.default_provider.clone());
        builder = builder.provider(&default_provider)?;

        if let Some(endpoint) = &cli_config.remote.endpoint {
            builder = builder.remote_endpoint(endpoint.clone());
        }
        if let Ok(key) = std::env::var(&cli_config.remote.api_key_env) {
            builder = builder.remote_api_key(key);
        }
        builder = builder.remote_timeout(std::time::Duration::from_secs(
            cli_config.remote.timeout_secs,
        ));

        let history_path = self
            .history
            .clone()
            .or_else(|| cli_config.analysis.history_file.clone().map(PathBuf::from));
        if let Some(path) = history_path {
            builder = builder.history_file(path);
        }

        let config = builder.build()?;
        Ok(Analyzer::with_config(config)?)
    }

    /// Gather the texts to analyze from args, files, or stdin
    fn collect_texts(&self) -> Result<Vec<String>> {
        if let Some(text) = &self.text {
            return Ok(vec![text.clone()]);
        }

        if !self.input.is_empty() {
            let files = input::resolve_patterns(&self.input)?;
            let mut texts = Vec::new();
            for file in files {
                let contents = fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                texts.extend(
                    contents
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(String::from),
                );
            }
            return Ok(texts);
        }

        let contents = input::read_stdin()?;
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Open the output writer and wrap it in the selected formatter
    ///
    /// The `--format` flag wins; without it the config file's
    /// `default_format` applies.
    fn make_formatter(&self, cli_config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config_name(&cli_config.output.default_format)?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(std::io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json if cli_config.output.pretty_json => {
                Box::new(JsonFormatter::new(writer))
            }
            OutputFormat::Json => Box::new(JsonFormatter::compact(writer)),
        })
    }
}
