//! Entry point of api-generator.
//! Parses the command line, configures logging and runs the generator.

use api_generator::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::{generate, GeneratorOptions},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    println!("Welcome to api-generator!");

    let options = GeneratorOptions::from(args);
    log::debug!("Generating with {:?}", options);
    generate(&options)?;

    println!("Boilerplate code generated successfully!");
    Ok(())
}
