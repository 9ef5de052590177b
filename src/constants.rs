//! Common constants used throughout the generator.

/// Database kind used when `--db` is not given
pub const DEFAULT_DB_TYPE: &str = "mysql";

/// Cache kind used when `--cache` is not given
pub const DEFAULT_CACHE_TYPE: &str = "redis";

/// Directory the bundled templates are read from, relative to the crate root
pub const TEMPLATES_DIR: &str = "templates";
