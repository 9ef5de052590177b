//! Template registry for the generator.
//! Maps every destination path of the generated project to the template it is
//! rendered from, and fetches template text from a pluggable store.

use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use rust_embed::RustEmbed;
use std::path::PathBuf;

/// Group a registered template belongs to.
///
/// The generator materializes groups one after the other, in the order
/// returned by [`TemplateGroup::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateGroup {
    /// Application sources: API entrypoint, router, handlers and DB layer
    Source,
    /// Container build files
    Container,
}

impl TemplateGroup {
    pub fn all() -> [TemplateGroup; 2] {
        [TemplateGroup::Source, TemplateGroup::Container]
    }
}

impl std::fmt::Display for TemplateGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateGroup::Source => write!(f, "source files"),
            TemplateGroup::Container => write!(f, "container files"),
        }
    }
}

/// Destination path, template name and group for every generated file.
const TEMPLATES: &[(&str, &str, TemplateGroup)] = &[
    ("cmd/api/main.go", "main.go.tmpl", TemplateGroup::Source),
    ("cmd/api/router.go", "router.go.tmpl", TemplateGroup::Source),
    ("cmd/api/get-api.go", "get-api.go.tmpl", TemplateGroup::Source),
    ("cmd/api/post-api.go", "post-api.go.tmpl", TemplateGroup::Source),
    ("DBLayer/connection.go", "connection.go.tmpl", TemplateGroup::Source),
    ("DBLayer/dbutils.go", "dbutils.go.tmpl", TemplateGroup::Source),
    ("Dockerfile.api", "Dockerfile.api.tmpl", TemplateGroup::Container),
    ("Dockerfile.db", "Dockerfile.db.tmpl", TemplateGroup::Container),
];

/// A template paired with the file it is materialized into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Destination path relative to the output root
    pub destination: PathBuf,
    /// Template name, used for diagnostics and as the engine's template name
    pub name: String,
    /// Raw template text
    pub body: String,
}

impl TemplateEntry {
    pub fn new<P, N, B>(destination: P, name: N, body: B) -> Self
    where
        P: Into<PathBuf>,
        N: Into<String>,
        B: Into<String>,
    {
        Self { destination: destination.into(), name: name.into(), body: body.into() }
    }
}

/// Trait for stores that supply template text by name.
pub trait TemplateStore {
    /// Returns the raw text of the template called `name`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the store has no such template
    fn fetch(&self, name: &str) -> Result<String>;
}

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

/// Store backed by the `templates/` directory bundled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedStore {
    fn fetch(&self, name: &str) -> Result<String> {
        let asset = Assets::get(name).ok_or_else(|| Error::TemplateNotFound {
            path: format!("{TEMPLATES_DIR}/{name}"),
        })?;
        String::from_utf8(asset.data.into_owned())
            .map_err(|_| Error::TemplateEncoding { name: name.to_string() })
    }
}

/// Store holding template text compiled into the caller as string constants.
#[derive(Debug, Default, Clone)]
pub struct InlineStore {
    templates: IndexMap<String, String>,
}

impl InlineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the template called `name`.
    pub fn with_template<N: Into<String>, B: Into<String>>(mut self, name: N, body: B) -> Self {
        self.templates.insert(name.into(), body.into());
        self
    }
}

impl TemplateStore for InlineStore {
    fn fetch(&self, name: &str) -> Result<String> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| Error::TemplateNotFound { path: name.to_string() })
    }
}

/// Resolves destinations to template entries using a [`TemplateStore`].
pub struct Registry<'a> {
    store: Box<dyn TemplateStore + 'a>,
}

impl Registry<'static> {
    /// Registry reading from the bundled templates.
    pub fn embedded() -> Self {
        Self::new(EmbeddedStore::new())
    }
}

impl<'a> Registry<'a> {
    pub fn new<S: TemplateStore + 'a>(store: S) -> Self {
        Self { store: Box::new(store) }
    }

    /// Every registered destination, in materialization order.
    pub fn destinations() -> impl Iterator<Item = &'static str> {
        TEMPLATES.iter().map(|(destination, _, _)| *destination)
    }

    /// Looks up the template registered for `destination`.
    ///
    /// # Errors
    /// * `Error::UnknownDestination` if nothing is registered for it
    /// * `Error::TemplateNotFound` if the store lacks the template
    pub fn lookup(&self, destination: &str) -> Result<TemplateEntry> {
        let (destination, name, _) = TEMPLATES
            .iter()
            .find(|(registered, _, _)| *registered == destination)
            .ok_or_else(|| Error::UnknownDestination {
                destination: destination.to_string(),
            })?;
        self.resolve(destination, name)
    }

    /// Resolves all entries of `group`, in table order.
    pub fn entries(&self, group: TemplateGroup) -> Result<Vec<TemplateEntry>> {
        TEMPLATES
            .iter()
            .filter(|(_, _, g)| *g == group)
            .map(|(destination, name, _)| self.resolve(destination, name))
            .collect()
    }

    fn resolve(&self, destination: &str, name: &str) -> Result<TemplateEntry> {
        debug!("Resolving template '{}' for '{}'.", name, destination);
        let body = self.store.fetch(name)?;
        Ok(TemplateEntry::new(destination, name, body))
    }
}
