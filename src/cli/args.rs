//! CLI argument definitions using clap
//!
//! Commands:
//! - tilesem list
//! - tilesem lookup <NAME>
//! - tilesem validate <NAME> --element <TYPE> [--count N | --variable] [--precision 32|64]
//! - tilesem check <SCHEMA> [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::semantic::ElementType;

/// tilesem - registry and validator for 3D Tiles metadata semantics
#[derive(Parser, Debug)]
#[command(name = "tilesem")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every reserved semantic with its required type
    List,

    /// Show the definition of one semantic
    Lookup {
        /// Semantic name, e.g. TILE_BOUNDING_REGION
        name: String,
    },

    /// Validate a declared property against a semantic
    Validate {
        /// Semantic name claimed by the property
        semantic: String,

        /// Element type (STRING, BOOLEAN, ENUM, INT8..UINT64, FLOAT)
        #[arg(long)]
        element: ElementType,

        /// Fixed component count (1 for a scalar)
        #[arg(long, default_value_t = 1, conflicts_with = "variable")]
        count: u32,

        /// Declare a variable-length array
        #[arg(long)]
        variable: bool,

        /// Float width in bits (32 or 64)
        #[arg(long)]
        precision: Option<u8>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check every semantic-tagged property in a metadata schema file
    Check {
        /// Path to the schema JSON
        schema: PathBuf,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
