//! api-generator writes the boilerplate of a Mux-based Go API: entrypoint,
//! router, handlers, a database layer and container build files, all rendered
//! from templates bundled into the binary.

/// Command-line interface module
pub mod cli;

/// Common constants and flag defaults
pub mod constants;

/// Substitution data passed to templates
pub mod context;

/// Error types and handling
pub mod error;

/// Code-generation routine
pub mod generator;

/// Rendering and writing of template entries
pub mod materializer;

/// Destination-to-template mapping and template stores
pub mod registry;

/// Template rendering functionality
pub mod renderer;
