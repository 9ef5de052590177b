//! Error handling for the generator.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or materializing templates.
///
/// Every variant carries the template name or the path involved so that a
/// single printed line is enough to diagnose the failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Bundled or inline template is missing
    #[error("Template '{path}' not found.")]
    TemplateNotFound { path: String },

    /// Registry has no row for the requested destination
    #[error("No template registered for destination '{destination}'.")]
    UnknownDestination { destination: String },

    /// Bundled asset is not valid UTF-8
    #[error("Template '{name}' is not valid UTF-8.")]
    TemplateEncoding { name: String },

    #[error("Failed to parse template '{name}': {source}.")]
    TemplateParse {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render template '{name}': {source}.")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to create directory '{}': {source}.", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file '{}': {source}.", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file '{}': {source}.", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generation context could not be converted for rendering
    #[error("Context error: {0}.")]
    Context(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
