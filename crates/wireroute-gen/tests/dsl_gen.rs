// crates/wireroute-gen/tests/dsl_gen.rs
// ============================================================================
// Module: DSL Generator Tests
// Description: Integration tests for builder rendering and determinism.
// Purpose: Validate generated output shape and catalog failure handling.
// Dependencies: wireroute-gen, tempfile
// ============================================================================

//! ## Overview
//! Integration tests covering deterministic rendering, the generated module
//! shape, and fail-closed handling of malformed catalogs.

use std::io::Write;
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

fn workspace_generator() -> Result<DslGenerator, DslGenError> {
    DslGenerator::load(workspace_root()?.join(DEFAULT_CATALOG_PATH))
}

fn write_temp_catalog(bytes: &[u8]) -> Result<tempfile::NamedTempFile, DslGenError> {
    let mut file =
        tempfile::NamedTempFile::new().map_err(|err| DslGenError::Io(err.to_string()))?;
    file.write_all(bytes).map_err(|err| DslGenError::Io(err.to_string()))?;
    Ok(file)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn rendering_is_deterministic() -> Result<(), DslGenError> {
    let first = workspace_generator()?.generated_files();
    let second = workspace_generator()?.generated_files();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn generated_files_lead_with_lib_then_sorted_modules() -> Result<(), DslGenError> {
    let files = workspace_generator()?.generated_files();
    let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(
        names,
        ["lib.rs", "aws_s3.rs", "file.rs", "http.rs", "kafka.rs", "sql.rs", "timer.rs"]
    );
    Ok(())
}

#[test]
fn kafka_module_renders_typed_setters() -> Result<(), DslGenError> {
    let module = workspace_generator()?.generate_component("kafka")?;
    assert!(module.starts_with("// @generated by wireroute-gen"));
    assert!(module.contains("pub struct KafkaEndpointBuilder"));
    assert!(module.contains("pub fn max_poll_records(mut self, max_poll_records: i64) -> Self"));
    assert!(module.contains("self.params.property(\"maxPollRecords\", max_poll_records);"));
    assert!(module.contains("pub fn synchronous(mut self, synchronous: bool) -> Self"));
    assert!(module.contains("/// Accepted values: `latest`, `earliest`, `none`."));
    assert!(module.contains("fn scheme(&self) -> &'static str"));
    Ok(())
}

#[test]
fn http_module_renders_optional_path_segments() -> Result<(), DslGenError> {
    let module = workspace_generator()?.generate_component("http")?;
    assert!(module.contains("port: Option<i64>,"));
    assert!(module.contains("if let Some(port) = &self.port {"));
    assert!(module.contains("url.push(':');"));
    assert!(module.contains("url.push('/');"));
    Ok(())
}

#[test]
fn deprecated_options_render_deprecated_attribute() -> Result<(), DslGenError> {
    let module = workspace_generator()?.generate_component("sql")?;
    assert!(module.contains("#[deprecated(note = \"deprecated in the component catalog\")]"));
    Ok(())
}

#[test]
fn secret_options_are_marked_in_docs_and_reference() -> Result<(), DslGenError> {
    let generator = workspace_generator()?;
    let module = generator.generate_component("aws-s3")?;
    assert!(module.contains("/// This value is a credential."));
    let markdown = generator.generate_markdown();
    assert!(markdown.contains("| `secretKey` | string |  | Amazon AWS secret key. (secret) |"));
    Ok(())
}

#[test]
fn unknown_scheme_is_rejected() -> Result<(), DslGenError> {
    let result = workspace_generator()?.generate_component("smtp");
    assert!(matches!(result, Err(DslGenError::UnknownComponent(scheme)) if scheme == "smtp"));
    Ok(())
}

#[test]
fn invalid_catalog_fails_closed_at_load() -> Result<(), DslGenError> {
    let file = write_temp_catalog(
        br#"{
            "version": "1.0",
            "components": [{
                "scheme": "timer",
                "title": "Timer",
                "description": "Fires exchanges on a fixed schedule.",
                "syntax": "timer:missingToken",
                "options": [{
                    "name": "timerName",
                    "kind": "path",
                    "type": "string",
                    "required": true,
                    "description": "Name of the timer."
                }]
            }]
        }"#,
    )?;
    let result = DslGenerator::load(file.path());
    assert!(
        matches!(&result, Err(DslGenError::Catalog(message)) if message.contains("no path option")),
        "expected validation failure at load"
    );
    Ok(())
}

#[test]
fn markdown_reference_lists_all_components() -> Result<(), DslGenError> {
    let markdown = workspace_generator()?.generate_markdown();
    for heading in [
        "## AWS S3 Storage (`aws-s3`)",
        "## HTTP Client (`http`)",
        "## SQL Database (`sql`)",
        "## Kafka Messaging (`kafka`)",
        "## File System (`file`)",
        "## Timer Scheduler (`timer`)",
    ] {
        assert!(markdown.contains(heading), "missing heading {heading}");
    }
    assert!(markdown.contains("Endpoint syntax: `http:host:port/resourcePath`"));
    Ok(())
}
