// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};

use lingoswitch::app_config::{Config, Engine, LogLevel};
use lingoswitch::models::{BatchTranslationRequest, TranslationRequest};
use lingoswitch::translation_service::TranslationService;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "lingoswitch",
    version,
    about = "Engine-switchable text translation service"
)]
struct CommandLineOptions {
    /// Path to the configuration file
    #[arg(
        short,
        long,
        default_value = "lingoswitch.conf.json",
        env = "LINGOSWITCH_CONFIG"
    )]
    config: String,

    /// Override the configured translation engine (remote, llm, local)
    #[arg(short, long)]
    engine: Option<String>,

    /// Log level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a single text
    Translate {
        /// Text to translate
        text: String,

        /// Source language code
        #[arg(long = "from")]
        source: String,

        /// Target language code
        #[arg(long = "to")]
        target: String,
    },

    /// Translate multiple texts under one shared language pair
    Batch {
        /// Texts to translate, in order
        #[arg(required = true)]
        texts: Vec<String>,

        /// Source language code
        #[arg(long = "from")]
        source: String,

        /// Target language code
        #[arg(long = "to")]
        target: String,
    },

    /// List the active provider's supported languages
    Languages,

    /// Probe the active provider's health
    Health,
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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
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
    // Initialize the logger once with info level by default;
    // the level is adjusted after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let mut config = if Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        warn!(
            "Config file not found at '{}', using default configuration",
            cli.config
        );
        Config::default()
    };

    if let Some(engine) = &cli.engine {
        // Fail early on a bad override instead of at first dispatch
        let parsed: Engine = engine.parse()?;
        config.engine = parsed.as_str().to_string();
    }

    let log_level = cli
        .log_level
        .map(LogLevel::from)
        .unwrap_or(config.log_level);
    log::set_max_level(log_level.to_level_filter());

    let service = TranslationService::new(&config);

    match cli.command {
        Commands::Translate {
            text,
            source,
            target,
        } => {
            let request = TranslationRequest::new(text, source, target);
            let result = service.translate(&request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Batch {
            texts,
            source,
            target,
        } => {
            let request = BatchTranslationRequest::new(texts, source, target);
            let result = service.translate_batch(&request).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Languages => {
            let result = service.supported_languages()?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Health => {
            let status = service.health_check().await;
            println!("{}", serde_json::to_string_pretty(&status)?);
            if !status.healthy {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
