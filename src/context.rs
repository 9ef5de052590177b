//! Substitution data handed to every template.

use crate::constants::{DEFAULT_CACHE_TYPE, DEFAULT_DB_TYPE};
use crate::error::Result;
use serde::Serialize;

/// Values available to templates as `{{ db_type }}` and `{{ cache_type }}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationContext {
    pub db_type: String,
    pub cache_type: String,
}

impl GenerationContext {
    pub fn new<D: Into<String>, C: Into<String>>(db_type: D, cache_type: C) -> Self {
        Self { db_type: db_type.into(), cache_type: cache_type.into() }
    }

    /// Converts the context into the JSON value the renderer consumes.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self::new(DEFAULT_DB_TYPE, DEFAULT_CACHE_TYPE)
    }
}
