//! Command-line interface implementation for the generator.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_CACHE_TYPE, DEFAULT_DB_TYPE};
use crate::generator::GeneratorOptions;

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(
    name = "api-generator",
    author,
    version,
    about = "Generate boilerplate code for Mux-based API",
    long_about = None
)]
pub struct Args {
    /// Database type (mysql, postgresql, etc)
    #[arg(short, long, default_value = DEFAULT_DB_TYPE)]
    pub db: String,

    /// Cache type (redis, memcached, etc)
    #[arg(short, long, default_value = DEFAULT_CACHE_TYPE)]
    pub cache: String,

    /// Directory the boilerplate is written into
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for GeneratorOptions {
    fn from(args: Args) -> Self {
        GeneratorOptions {
            output_dir: args.output_dir,
            db_type: args.db,
            cache_type: args.cache,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
