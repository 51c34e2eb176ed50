// crates/wireroute-components/tests/generated_surface.rs
// ============================================================================
// Module: Generated Surface Drift Tests
// Description: Verifies committed builder sources match generator output.
// Purpose: Keep the checked-in surface in sync with the catalog.
// Dependencies: wireroute-gen
// ============================================================================

//! ## Overview
//! Drift checks comparing the committed builder sources and component
//! reference against freshly generated output. A failure means the catalog
//! changed without regenerating; run `wireroute-gen generate`.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use wireroute_gen::DEFAULT_CATALOG_PATH;
use wireroute_gen::DslGenError;
use wireroute_gen::DslGenerator;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

fn workspace_root() -> Result<PathBuf, DslGenError> {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = manifest
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| DslGenError::Io("missing workspace root".to_string()))?;
    Ok(root)
}

fn read_string(path: &Path) -> Result<String, DslGenError> {
    fs::read_to_string(path).map_err(|err| DslGenError::Io(err.to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn builder_sources_match_generated_output() -> Result<(), DslGenError> {
    let root = workspace_root()?;
    let generator = DslGenerator::load(root.join(DEFAULT_CATALOG_PATH))?;
    for file in generator.generated_files() {
        let committed = read_string(&root.join("crates/wireroute-components/src").join(&file.name))?;
        if committed != file.content {
            return Err(DslGenError::Drift(format!(
                "{} is stale. Run wireroute-gen generate.",
                file.name
            )));
        }
    }
    Ok(())
}

#[test]
fn component_reference_matches_generated_output() -> Result<(), DslGenError> {
    let root = workspace_root()?;
    let generator = DslGenerator::load(root.join(DEFAULT_CATALOG_PATH))?;
    let committed = read_string(&root.join("docs/components.md"))?;
    if committed != generator.generate_markdown() {
        return Err(DslGenError::Drift(
            "docs/components.md is stale. Run wireroute-gen generate.".to_string(),
        ));
    }
    Ok(())
}
