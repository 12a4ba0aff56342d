// Catalog loading.
// Reads a JSON catalog from disk or falls back to the built-in content.

use std::fs;
use std::path::Path;

use crate::error::{DevfolioError, Result};

use super::content;
use super::types::Catalog;

/// Read a catalog JSON file.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path).map_err(|e| DevfolioError::Catalog {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| DevfolioError::Catalog {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the catalog from `path` if given, otherwise use the built-in content.
pub fn load(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = read_catalog(path)?;
            tracing::info!(
                path = %path.display(),
                projects = catalog.projects.len(),
                "loaded catalog file"
            );
            Ok(catalog)
        }
        None => Ok(content::builtin()),
    }
}
