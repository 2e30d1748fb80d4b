use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors (default)
    Warn,
    /// Informational messages
    Info,
    /// Debug messages, including the incoming query tree
    Debug,
    /// Trace-level messages (per-segment output)
    Trace,
}

impl LogLevel {
    /// Directive value understood by `EnvFilter`
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line
    #[default]
    Text,
    /// JSON objects
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "korp-fcs")]
#[command(about = "korp-fcs - translate parsed CQL / FCS-QL queries to Korp CQP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/korp-fcs/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(short = 'f', long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a parsed query tree (JSON) to CQP
    Translate {
        /// SRU query type of the tree: cql or fcs (defaults to config value)
        #[arg(short = 't', long)]
        query_type: Option<String>,

        /// File holding the JSON tree; reads stdin when omitted or '-'
        input: Option<PathBuf>,
    },

    /// Map part-of-speech tags between UD-17 and SUC
    #[command(subcommand)]
    Tag(TagCommands),

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// UD-17 tag to SUC candidates
    ToSuc {
        /// UD-17 tag, e.g. ADJ
        tag: String,
    },

    /// SUC tag (attributes after '.' are ignored) to UD-17 candidates
    ToUd {
        /// SUC tag, e.g. PC.PRF.UTR.SIN.IND.NOM
        tag: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Write an example configuration file
    Init {
        /// Target path (defaults to ~/.config/korp-fcs/config.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
