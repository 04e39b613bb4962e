//! Catalog files.
//!
//! A catalog file is a JSON array of objects, one per spreadsheet row. Object keys are the
//! column headers, kept in file order. Values may be strings, numbers, booleans or null.

use std::{fs, path::Path};

use serde_json::Value;
use tracing::{debug, warn};

use crate::{Catalog, CatalogError, NormalizeReport, RawRow, normalize_rows};

/// Loads and normalizes a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    load_catalog_with_report(path).map(|(catalog, _)| catalog)
}

/// Loads a catalog file and reports what normalization dropped.
pub fn load_catalog_with_report(path: &Path) -> Result<(Catalog, NormalizeReport), CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_rows(&contents, path)?;
    debug!(path = %path.display(), rows = rows.len(), "read catalog file");
    Ok(normalize_rows(rows))
}

/// Loads a catalog file, falling back to an empty catalog on any error.
///
/// The failure is logged. Recommending from an empty catalog yields no picks.
pub fn load_catalog_or_empty(path: &Path) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "using an empty catalog");
            Catalog::default()
        }
    }
}

/// Parses catalog JSON into raw rows.
///
/// The `path` parameter is used for error reporting.
pub fn parse_rows(contents: &str, path: &Path) -> Result<Vec<RawRow>, CatalogError> {
    let value: Value = serde_json::from_str(contents).map_err(|source| CatalogError::ParseJson {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(CatalogError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(header, value)| (header, cell_text(value)))
                .collect()),
            _ => Err(CatalogError::RowNotObject {
                path: path.to_path_buf(),
                index,
            }),
        })
        .collect()
}

/// Renders a JSON cell as text.
///
/// Arrays of scalars are joined with `", "` so keyword lists may be written either way.
fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .into_iter()
            .map(cell_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
