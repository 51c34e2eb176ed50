// crates/wireroute-catalog/tests/catalog_load.rs
// ============================================================================
// Module: Catalog Loading Tests
// Description: Integration tests for catalog file loading and limits.
// Purpose: Validate size bounds, parse failures, and the shipped catalog.
// Dependencies: wireroute-catalog, tempfile
// ============================================================================

//! ## Overview
//! Integration tests covering the size-limited loader, unknown-field
//! rejection, and validation of the catalog shipped at the workspace root.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use wireroute_catalog::CatalogError;
use wireroute_catalog::ComponentCatalog;
use wireroute_catalog::MAX_CATALOG_BYTES;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

fn workspace_root() -> Result<PathBuf, CatalogError> {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = manifest
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| CatalogError::Io("missing workspace root".to_string()))?;
    Ok(root)
}

fn write_temp_catalog(bytes: &[u8]) -> Result<tempfile::NamedTempFile, CatalogError> {
    let mut file =
        tempfile::NamedTempFile::new().map_err(|err| CatalogError::Io(err.to_string()))?;
    file.write_all(bytes).map_err(|err| CatalogError::Io(err.to_string()))?;
    Ok(file)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn shipped_catalog_loads_and_validates() -> Result<(), CatalogError> {
    let root = workspace_root()?;
    let catalog = ComponentCatalog::load(root.join("catalog/components.json"))?;
    catalog.validate()?;
    for scheme in ["aws-s3", "http", "sql", "kafka", "file", "timer"] {
        assert!(catalog.component(scheme).is_some(), "missing component {scheme}");
    }
    Ok(())
}

#[test]
fn oversized_catalog_is_rejected() -> Result<(), CatalogError> {
    let size = usize::try_from(MAX_CATALOG_BYTES + 1)
        .map_err(|_| CatalogError::Io("size does not fit in usize".to_string()))?;
    let file = write_temp_catalog(&vec![b' '; size])?;
    let result = ComponentCatalog::load(file.path());
    assert!(
        matches!(&result, Err(CatalogError::Invalid(message)) if message.contains("exceeds")),
        "expected size rejection"
    );
    Ok(())
}

#[test]
fn malformed_json_is_rejected() -> Result<(), CatalogError> {
    let file = write_temp_catalog(b"{\"version\": ")?;
    assert!(matches!(ComponentCatalog::load(file.path()), Err(CatalogError::Json(_))));
    Ok(())
}

#[test]
fn unknown_fields_are_rejected() {
    let result = ComponentCatalog::from_slice(
        br#"{"version": "1.0", "components": [], "extra": true}"#,
    );
    assert!(matches!(result, Err(CatalogError::Json(_))));
}

#[test]
fn missing_file_reports_io_error() {
    let missing = PathBuf::from("does-not-exist/components.json");
    assert!(!missing.exists());
    assert!(matches!(ComponentCatalog::load(&missing), Err(CatalogError::Io(_))));
}

#[test]
fn catalog_round_trips_through_serde() -> Result<(), CatalogError> {
    let root = workspace_root()?;
    let bytes = fs::read(root.join("catalog/components.json"))
        .map_err(|err| CatalogError::Io(err.to_string()))?;
    let catalog = ComponentCatalog::from_slice(&bytes)?;
    let rendered =
        serde_json::to_vec(&catalog).map_err(|err| CatalogError::Json(err.to_string()))?;
    let reparsed = ComponentCatalog::from_slice(&rendered)?;
    assert_eq!(catalog, reparsed);
    Ok(())
}
