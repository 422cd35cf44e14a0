//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP client (User-Agent, timeouts)
//! - Logger
//! - Field table (built-in or loaded from JSON)
//! - The `ScrapeContext` bundling them
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

use std::path::Path;
use std::sync::Arc;

use crate::config::{Config, Endpoints};
use crate::error_handling::InitializationError;
use crate::fetch::ScrapeContext;
use crate::parse::{CompiledFieldTable, FieldTable};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Loads a field table from a JSON file.
///
/// # Errors
///
/// Returns `FieldTableReadError` if the file cannot be read and
/// `FieldTableParseError` if it is not a valid table.
pub fn load_field_table(path: &Path) -> Result<FieldTable, InitializationError> {
    let json =
        std::fs::read_to_string(path).map_err(|source| InitializationError::FieldTableReadError {
            path: path.to_path_buf(),
            source,
        })?;
    FieldTable::from_json_str(&json).map_err(|source| InitializationError::FieldTableParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Compiles the configured field table (the built-in one if none is configured).
///
/// # Errors
///
/// Propagates load errors and `SelectorError` for an unparseable selector.
pub fn init_field_table(config: &Config) -> Result<Arc<CompiledFieldTable>, InitializationError> {
    let table = match &config.field_table {
        Some(path) => {
            log::info!("Loading field table from {}", path.display());
            load_field_table(path)?
        }
        None => FieldTable::default(),
    };
    Ok(Arc::new(table.compile()?))
}

/// Builds the `ScrapeContext` for a validated configuration.
///
/// # Errors
///
/// Returns `InitializationError` if the configuration is invalid, the field
/// table cannot be loaded or compiled, or the HTTP client cannot be built.
pub fn init_context(config: &Config) -> Result<ScrapeContext, InitializationError> {
    config.validate()?;
    let endpoints = Endpoints::new(&config.base_url)?;
    let fields = init_field_table(config)?;
    let client = init_client(config)?;
    Ok(ScrapeContext::new(
        client,
        endpoints,
        fields,
        config.default_shid.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_table(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(json.as_bytes()).expect("Failed to write table");
        file.flush().expect("Failed to flush file");
        file
    }

    #[test]
    fn test_init_context_defaults() {
        let ctx = init_context(&Config::default()).expect("default config initializes");
        assert_eq!(ctx.default_shid, "8B48E22B1865559DA4EB");
        assert_eq!(ctx.endpoints.origin(), "https://jobserve.com");
        assert_eq!(ctx.fields.rules().len(), 9);
    }

    #[test]
    fn test_init_context_rejects_invalid_config() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(matches!(
            init_context(&config),
            Err(InitializationError::ConfigError(_))
        ));
    }

    #[test]
    fn test_init_context_loads_field_table_file() {
        let file = write_table(r##"[{"field": "rate", "selector": "#pay"}]"##);
        let config = Config {
            field_table: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let ctx = init_context(&config).expect("table file loads");
        assert_eq!(ctx.fields.rules().len(), 1);
    }

    #[test]
    fn test_load_field_table_missing_file() {
        let err = load_field_table(Path::new("/nonexistent/fields.json")).unwrap_err();
        assert!(matches!(err, InitializationError::FieldTableReadError { .. }));
        assert!(err.to_string().contains("/nonexistent/fields.json"));
    }

    #[test]
    fn test_load_field_table_invalid_json() {
        let file = write_table("{ not a table");
        let err = load_field_table(file.path()).unwrap_err();
        assert!(matches!(err, InitializationError::FieldTableParseError { .. }));
    }

    #[test]
    fn test_init_field_table_bad_selector() {
        let file = write_table(r#"[{"field": "title", "selector": "h1["}]"#);
        let config = Config {
            field_table: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            init_field_table(&config),
            Err(InitializationError::SelectorError { .. })
        ));
    }
}
