use anyhow::Result;
use clap::Parser;
use korp_fcs_query::TranslationError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use korp_fcs_cli::cli::{Cli, Commands, OutputFormat};
use korp_fcs_cli::commands::{self, Output};
use korp_fcs_cli::config::CliConfig;

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.clone()) {
        Ok(mut config) => {
            if let Some(format) = cli.format {
                config.output.format = format;
            }
            config
        }
        Err(e) => {
            report(&e, cli.format.unwrap_or_default());
            std::process::exit(1);
        }
    };

    let format = config.output.format;
    if let Err(e) = run(cli, config) {
        report(&e, format);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: CliConfig) -> Result<()> {
    let level = config.resolve_log_level(cli.log_level, cli.verbose);
    // RUST_LOG wins over the resolved level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "korp_fcs_query={0},korp_fcs_cli={0}",
                level.as_str()
            ))
        }))
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "configuration loaded");

    let output = Output {
        format: config.output.format,
        pretty: config.output.pretty,
    };

    match cli.command {
        Commands::Translate { query_type, input } => {
            commands::translate::execute(query_type, input, config.query.default_type, output)
        }
        Commands::Tag(command) => commands::tag::execute(command, output),
        Commands::Config(command) => commands::config::execute(command, &config),
    }
}

/// Print a failure to stderr, as an SRU diagnostic when translation failed
fn report(error: &anyhow::Error, format: OutputFormat) {
    let Some(translation_error) = error.downcast_ref::<TranslationError>() else {
        eprintln!("Error: {:#}", error);
        return;
    };

    let diagnostic = translation_error.diagnostic();
    match format {
        OutputFormat::Json => match serde_json::to_string(&diagnostic) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("Error: {:#}", error),
        },
        OutputFormat::Text => eprintln!(
            "error[{}]: {} ({})",
            translation_error.kind(),
            diagnostic.message,
            diagnostic.uri
        ),
    }
}
