//! Code-generation routine tying the registry, renderer and materializer
//! together.

use crate::constants::{DEFAULT_CACHE_TYPE, DEFAULT_DB_TYPE};
use crate::context::GenerationContext;
use crate::error::Result;
use crate::materializer::Materializer;
use crate::registry::{Registry, TemplateGroup};
use crate::renderer::MiniJinjaRenderer;
use log::debug;
use std::path::PathBuf;

/// Options selected by the user for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Root the destination paths are resolved against
    pub output_dir: PathBuf,
    pub db_type: String,
    pub cache_type: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            db_type: DEFAULT_DB_TYPE.to_string(),
            cache_type: DEFAULT_CACHE_TYPE.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn context(&self) -> GenerationContext {
        GenerationContext::new(&self.db_type, &self.cache_type)
    }
}

/// Generates the full boilerplate set from the bundled templates.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Every written path, source files first
pub fn generate(options: &GeneratorOptions) -> Result<Vec<PathBuf>> {
    generate_with(&Registry::embedded(), options)
}

/// Generates the boilerplate set using templates from `registry`.
///
/// # Flow
/// 1. Builds the generation context from the options
/// 2. Materializes the source files
/// 3. Materializes the container build files
pub fn generate_with(registry: &Registry<'_>, options: &GeneratorOptions) -> Result<Vec<PathBuf>> {
    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(&renderer, &options.output_dir);
    let context = options.context();

    let mut written = Vec::new();
    for group in TemplateGroup::all() {
        debug!("Generating {}.", group);
        let entries = registry.entries(group)?;
        written.extend(materializer.materialize(&entries, &context)?);
    }
    Ok(written)
}
