//! Library surface of the `korp-fcs` command-line tool.
//!
//! Exposed so the integration tests and the binary share the argument,
//! configuration and command definitions.

pub mod cli;
pub mod commands;
pub mod config;
