// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use romalens::app_config::{self, Config};
use romalens::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Options shared by every command that loads the configuration
#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Ollama model used for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Ollama server URL
    #[arg(long, env = "OLLAMA_HOST")]
    endpoint: Option<String>,

    /// Source language code (e.g., 'ja')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Maximum characters per translation call
    #[arg(long)]
    max_chars: Option<usize>,

    /// Words translated per batch
    #[arg(long)]
    batch_size: Option<usize>,

    /// Pause between word batches in milliseconds
    #[arg(long)]
    batch_delay_ms: Option<u64>,

    /// Keep Latin text instead of filtering to Japanese
    #[arg(long)]
    all_scripts: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Romanize and translate recognized text
    Translate {
        /// Text file to read, or '-' for standard input
        #[arg(value_name = "INPUT")]
        input: String,

        /// Treat each line of the input as a separate OCR block
        #[arg(short, long)]
        blocks: bool,

        /// Write the result as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result as JSON instead of plain text
        #[arg(long)]
        json: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Show how a text would be chunked for translation
    Chunk {
        /// Text file to read, or '-' for standard input
        #[arg(value_name = "INPUT")]
        input: String,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List the words and their romaji without translating
    Words {
        /// Text file to read, or '-' for standard input
        #[arg(value_name = "INPUT")]
        input: String,

        /// Treat each line of the input as a separate OCR block
        #[arg(short, long)]
        blocks: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Check that the Ollama server is reachable
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Generate shell completions for romalens
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// romalens - Japanese text romanization and translation
#[derive(Parser, Debug)]
#[command(name = "romalens")]
#[command(version)]
#[command(about = "Romanize and translate Japanese text recognized from images")]
#[command(long_about = "romalens takes text recognized from an image, shows its romaji reading and
translates it to English with a local Ollama model, both as a whole and word by word.

EXAMPLES:
    romalens translate sign.txt                  # Translate a text file
    romalens translate --blocks ocr.txt          # One OCR block per line
    cat sign.txt | romalens translate -          # Read standard input
    romalens translate -o out.json sign.txt      # Also write the result as JSON
    romalens chunk --max-chars 20 menu.txt       # Show the translation chunks
    romalens words menu.txt                      # Words and romaji only
    romalens completions bash > romalens.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // The max level is lowered later from the config
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(record.level()),
                now,
                Self::get_emoji_for_level(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "romalens", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate { input, blocks, output, json, no_progress, config } => {
            let mut controller = Controller::with_config(load_config(&config)?)?;
            controller.set_show_progress(!no_progress);
            let result = controller.translate(&input, blocks, output.as_deref()).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result).context("Failed to serialize result")?);
            } else {
                print!("{}", Controller::render_view(&result.session));
            }
            Ok(())
        }
        Commands::Chunk { input, config } => {
            let controller = Controller::with_config(load_config(&config)?)?;
            let chunks = controller.chunk(&input)?;
            for (index, chunk) in chunks.iter().enumerate() {
                println!("--- chunk {}/{} ({} chars)", index + 1, chunks.len(), chunk.chars().count());
                println!("{}", chunk);
            }
            Ok(())
        }
        Commands::Words { input, blocks, config } => {
            let controller = Controller::with_config(load_config(&config)?)?;
            for item in controller.words(&input, blocks)? {
                println!("{}\t{}", item.japanese, item.romaji);
            }
            Ok(())
        }
        Commands::Check { config } => {
            let controller = Controller::with_config(load_config(&config)?)?;
            let version = controller.test_connection().await?;
            info!("Ollama {} is reachable, model {}", version, controller.config().translation.model);
            Ok(())
        }
    }
}

/// Load or create the configuration and apply command line overrides
fn load_config(options: &ConfigArgs) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    if let Some(model) = &options.model {
        config.translation.model = model.clone();
    }
    if let Some(endpoint) = &options.endpoint {
        config.translation.endpoint = endpoint.clone();
    }
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(max_chars) = options.max_chars {
        config.pipeline.max_chars_per_translation = max_chars;
    }
    if let Some(batch_size) = options.batch_size {
        config.pipeline.batch_size = batch_size;
    }
    if let Some(delay) = options.batch_delay_ms {
        config.pipeline.batch_delay_ms = delay;
    }
    if options.all_scripts {
        config.recognition.japanese_only = false;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}
