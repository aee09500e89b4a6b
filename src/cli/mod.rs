//! CLI module for tilesem
//!
//! Provides command-line interface for:
//! - list: print the semantic catalog
//! - lookup: print one semantic definition
//! - validate: check one declared property against a semantic
//! - check: check every semantic in a metadata schema file

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    catalog_json, check, check_schema, declared_from_args, list, lookup, lookup_json, run,
    run_command, validate,
};
pub use config::{Config, MismatchPolicy};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, write_error, write_response};
