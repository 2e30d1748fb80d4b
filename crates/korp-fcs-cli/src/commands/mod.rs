//! Subcommand implementations.

pub mod config;
pub mod tag;
pub mod translate;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Resolved output settings shared by all commands
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Output {
    /// Serialize a value as JSON honoring the `pretty` setting
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value).context("Failed to serialize output")
        } else {
            serde_json::to_string(value).context("Failed to serialize output")
        }
    }

    /// Print either the text lines or the JSON value, depending on format
    pub fn emit<T: Serialize>(&self, lines: &[String], value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for line in lines {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => println!("{}", self.to_json(value)?),
        }
        Ok(())
    }
}
