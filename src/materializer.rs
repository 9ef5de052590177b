//! Writes rendered templates to their destinations.
//! Entries are processed in order and the first failure aborts the batch;
//! files written before the failure are left in place.

use crate::context::GenerationContext;
use crate::error::{Error, Result};
use crate::registry::TemplateEntry;
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Materializes template entries under an output root.
pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    output_root: PathBuf,
}

impl<'a> Materializer<'a> {
    pub fn new<P: AsRef<Path>>(renderer: &'a dyn TemplateRenderer, output_root: P) -> Self {
        Self { renderer, output_root: output_root.as_ref().to_path_buf() }
    }

    /// Renders and writes every entry, stopping at the first failure.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Paths written, in order
    ///
    /// # Errors
    /// * The error of the first entry that failed; later entries are skipped
    pub fn materialize(
        &self,
        entries: &[TemplateEntry],
        context: &GenerationContext,
    ) -> Result<Vec<PathBuf>> {
        let context = context.to_value()?;
        let mut written = Vec::with_capacity(entries.len());
        for entry in entries {
            let target = self.materialize_entry(entry, &context)?;
            println!("Generated: '{}'", target.display());
            written.push(target);
        }
        Ok(written)
    }

    fn materialize_entry(
        &self,
        entry: &TemplateEntry,
        context: &serde_json::Value,
    ) -> Result<PathBuf> {
        let target = self.output_root.join(&entry.destination);

        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }

        debug!("Rendering template '{}'.", entry.name);
        let content = self.renderer.render(&entry.name, &entry.body, context)?;

        debug!("Writing file: {}", target.display());
        write_file(&target, &content)?;
        Ok(target)
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path)
        .map_err(|source| Error::CreateDirectory { path: path.to_path_buf(), source })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|source| Error::CreateFile { path: path.to_path_buf(), source })?;
    file.write_all(content.as_bytes())
        .map_err(|source| Error::Write { path: path.to_path_buf(), source })
}
