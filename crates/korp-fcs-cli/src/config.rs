use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use korp_fcs_query::QueryType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::{LogLevel, OutputFormat};

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level when neither `--log-level` nor `--verbose` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Query configuration
    #[serde(default)]
    pub query: QueryConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Result format (text or json)
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

/// Query configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Query type assumed for bare trees passed to `translate`
    #[serde(default = "default_query_type")]
    pub default_type: QueryType,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_type: default_query_type(),
        }
    }
}

fn default_query_type() -> QueryType {
    QueryType::Fcs
}

impl CliConfig {
    /// Load configuration with precedence: defaults < file < env
    ///
    /// Command-line arguments are applied on top by the caller.
    pub fn load(config_file: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::from_file_or_default(config_file)?;

        if let Ok(level) = std::env::var("KORP_FCS_LOG_LEVEL") {
            config.log_level = Some(
                LogLevel::from_str(&level, true)
                    .map_err(|e| anyhow::anyhow!(e))
                    .with_context(|| format!("Invalid KORP_FCS_LOG_LEVEL: {}", level))?,
            );
        }
        if let Ok(query_type) = std::env::var("KORP_FCS_QUERY_TYPE") {
            config.query.default_type = query_type
                .parse()
                .with_context(|| format!("Invalid KORP_FCS_QUERY_TYPE: {}", query_type))?;
        }
        if let Ok(format) = std::env::var("KORP_FCS_OUTPUT_FORMAT") {
            config.output.format = OutputFormat::from_str(&format, true)
                .map_err(|e| anyhow::anyhow!(e))
                .with_context(|| format!("Invalid KORP_FCS_OUTPUT_FORMAT: {}", format))?;
        }

        Ok(config)
    }

    /// Effective log level: explicit flag, then `--verbose`, then config, then `warn`
    pub fn resolve_log_level(&self, flag: Option<LogLevel>, verbose: bool) -> LogLevel {
        flag.or(if verbose { Some(LogLevel::Debug) } else { None })
            .or(self.log_level)
            .unwrap_or(LogLevel::Warn)
    }

    /// Default config path: `<config dir>/korp-fcs/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("korp-fcs").join("config.toml"))
    }

    /// Write an example configuration file
    pub fn create_example(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }

        let example = r#"# korp-fcs configuration
# Location: ~/.config/korp-fcs/config.toml

# Log level: off, error, warn, info, debug, trace
log_level = "warn"

[output]
# Result format: text or json
format = "text"
# Pretty-print JSON output
pretty = false

[query]
# Query type of bare trees passed to `korp-fcs translate`: cql or fcs
default_type = "fcs"
"#;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        std::fs::write(path, example).context("Failed to write config file")?;

        Ok(())
    }

    /// Load config from file or return default
    fn from_file_or_default(config_file: Option<PathBuf>) -> Result<Self> {
        // Skip the user config so tests run against defaults
        if std::env::var("KORP_FCS_TEST_MODE").is_ok() && config_file.is_none() {
            return Ok(Self::default());
        }

        let path = match config_file {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Some(path)
            }
            None => Self::default_config_path().ok().filter(|p| p.exists()),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Display the current configuration as TOML
    pub fn display_as_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config as TOML")
    }

    /// Display the current configuration as JSON
    pub fn display_as_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config as JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();

        assert_eq!(config.log_level, None);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.pretty);
        assert_eq!(config.query.default_type, QueryType::Fcs);
    }

    #[test]
    fn test_example_round_trips_through_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        CliConfig::create_example(&path, false).unwrap();
        let config = CliConfig::from_file(&path).unwrap();

        assert_eq!(config.log_level, Some(LogLevel::Warn));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.query.default_type, QueryType::Fcs);
    }

    #[test]
    fn test_create_example_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"info\"\n").unwrap();

        assert!(CliConfig::create_example(&path, false).is_err());
        assert!(CliConfig::create_example(&path, true).is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[query]\ndefault_type = \"cql\"\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();

        assert_eq!(config.query.default_type, QueryType::Cql);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_invalid_query_type_in_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[query]\ndefault_type = \"lucene\"\n").unwrap();

        assert!(CliConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = CliConfig::from_file_or_default(Some(dir.path().join("missing.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_log_level_precedence() {
        let config = CliConfig {
            log_level: Some(LogLevel::Info),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_log_level(Some(LogLevel::Trace), true),
            LogLevel::Trace
        );
        assert_eq!(config.resolve_log_level(None, true), LogLevel::Debug);
        assert_eq!(config.resolve_log_level(None, false), LogLevel::Info);
        assert_eq!(
            CliConfig::default().resolve_log_level(None, false),
            LogLevel::Warn
        );
    }

    #[test]
    fn test_display_as_toml() {
        let toml = CliConfig::default().display_as_toml().unwrap();

        assert!(toml.contains("[query]"));
        assert!(toml.contains("default_type = \"fcs\""));
    }
}
