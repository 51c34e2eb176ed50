// crates/wireroute-catalog/src/types.rs
// ============================================================================
// Module: Catalog Types
// Description: Serde model for the component schema catalog.
// Purpose: Provide canonical shapes for components and their options.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines the typed catalog shapes serialized in
//! `catalog/components.json`. These structures are the canonical source for
//! the generated builder surface and the rendered component reference.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::error::CatalogError;

// ============================================================================
// CONSTANTS: Catalog input limits
// ============================================================================

/// Maximum catalog file size accepted by the loader.
pub const MAX_CATALOG_BYTES: u64 = 4 * 1024 * 1024;

// ============================================================================
// SECTION: Catalog Model
// ============================================================================

/// Versioned catalog of component schemas.
///
/// # Invariants
/// - Component order matches the catalog input and is preserved through
///   generation.
///
/// # Examples
/// ```
/// use wireroute_catalog::ComponentCatalog;
///
/// # fn main() -> Result<(), wireroute_catalog::CatalogError> {
/// let catalog = ComponentCatalog::from_slice(
///     br#"{
///         "version": "1.0",
///         "components": [{
///             "scheme": "timer",
///             "title": "Timer",
///             "description": "Fires exchanges on a fixed schedule.",
///             "syntax": "timer:timerName",
///             "options": [{
///                 "name": "timerName",
///                 "kind": "path",
///                 "type": "string",
///                 "required": true,
///                 "description": "Name of the timer."
///             }]
///         }]
///     }"#,
/// )?;
/// catalog.validate()?;
/// assert!(catalog.component("timer").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentCatalog {
    /// Catalog contract version.
    pub version: String,
    /// Component schemas, ordered as authored.
    pub components: Vec<ComponentSpec>,
}

/// Schema describing one component's endpoint configuration surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSpec {
    /// Component scheme identifying the connector (`kafka`, `aws-s3`).
    pub scheme: String,
    /// Human-readable component title.
    pub title: String,
    /// Component description for documentation and generated docs.
    pub description: String,
    /// Path syntax template, `scheme:segment` with `:` or `/` separators.
    pub syntax: String,
    /// True when the component is deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Endpoint options, path segments first by convention.
    pub options: Vec<OptionSpec>,
}

/// Position of an option within the endpoint URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Positional path segment concatenated into the URL portion.
    Path,
    /// Named query parameter forwarded through the property sink.
    Parameter,
}

/// Wire data type of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// String value.
    String,
    /// Boolean flag.
    Boolean,
    /// Integer value.
    Integer,
    /// Double-precision value.
    Double,
}

/// Schema for a single endpoint option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionSpec {
    /// Option name as it appears in the endpoint URI.
    pub name: String,
    /// Path segment or query parameter.
    pub kind: OptionKind,
    /// Wire data type.
    #[serde(rename = "type")]
    pub data_type: OptionType,
    /// True when the option must be set.
    #[serde(default)]
    pub required: bool,
    /// Default value applied by the framework when the option is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Option description for documentation and generated doc comments.
    pub description: String,
    /// True when the value is a credential and must not be logged.
    #[serde(default)]
    pub secret: bool,
    /// True when the option is deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Closed set of accepted values for string options.
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl ComponentCatalog {
    /// Loads a catalog from the given path.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the file cannot be read or parsed, or
    /// when it exceeds [`MAX_CATALOG_BYTES`].
    ///
    /// # Notes
    /// Loading performs JSON parsing only; call
    /// [`validate`](Self::validate) before trusting the content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let bytes = read_catalog_bytes(path.as_ref())?;
        Self::from_slice(&bytes)
    }

    /// Parses a catalog from raw JSON bytes.
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] when the bytes are not a valid catalog
    /// document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        serde_json::from_slice(bytes).map_err(|err| CatalogError::Json(err.to_string()))
    }

    /// Looks up a component schema by scheme.
    #[must_use]
    pub fn component(&self, scheme: &str) -> Option<&ComponentSpec> {
        self.components.iter().find(|component| component.scheme == scheme)
    }
}

impl ComponentSpec {
    /// Returns the syntax path tokens after the scheme prefix, in order.
    ///
    /// Tokens are the raw names between `:` and `/` separators; validation
    /// guarantees each names a path option.
    #[must_use]
    pub fn syntax_tokens(&self) -> Vec<&str> {
        let Some(rest) = self.syntax.strip_prefix(&format!("{}:", self.scheme)) else {
            return Vec::new();
        };
        rest.split(['/', ':']).filter(|token| !token.is_empty()).collect()
    }

    /// Returns the syntax tokens paired with their leading separator.
    ///
    /// The first token has no separator; later tokens carry the `:` or `/`
    /// that precedes them in the syntax template. The generator uses this to
    /// reconstruct the URL portion from path-segment fields.
    #[must_use]
    pub fn syntax_segments(&self) -> Vec<(Option<char>, &str)> {
        let Some(rest) = self.syntax.strip_prefix(&format!("{}:", self.scheme)) else {
            return Vec::new();
        };
        let mut segments = Vec::new();
        let mut token_start = 0;
        let mut separator = None;
        for (offset, ch) in rest.char_indices() {
            if ch == '/' || ch == ':' {
                if offset > token_start {
                    segments.push((separator, &rest[token_start .. offset]));
                }
                separator = Some(ch);
                token_start = offset + ch.len_utf8();
            }
        }
        if rest.len() > token_start {
            segments.push((separator, &rest[token_start ..]));
        }
        segments
    }

    /// Returns the path options in syntax order.
    #[must_use]
    pub fn path_options(&self) -> Vec<&OptionSpec> {
        self.syntax_tokens()
            .into_iter()
            .filter_map(|token| {
                self.options
                    .iter()
                    .find(|option| option.kind == OptionKind::Path && option.name == token)
            })
            .collect()
    }

    /// Returns the parameter options sorted by name.
    #[must_use]
    pub fn parameter_options(&self) -> Vec<&OptionSpec> {
        let mut parameters: Vec<&OptionSpec> = self
            .options
            .iter()
            .filter(|option| option.kind == OptionKind::Parameter)
            .collect();
        parameters.sort_by(|left, right| left.name.cmp(&right.name));
        parameters
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Reads the catalog file with size limits to avoid memory exhaustion.
fn read_catalog_bytes(path: &Path) -> Result<Vec<u8>, CatalogError> {
    let file = fs::File::open(path).map_err(|err| CatalogError::Io(err.to_string()))?;
    let metadata = file.metadata().map_err(|err| CatalogError::Io(err.to_string()))?;
    if metadata.len() > MAX_CATALOG_BYTES {
        return Err(CatalogError::Invalid(format!(
            "catalog input exceeds {MAX_CATALOG_BYTES} bytes"
        )));
    }
    let mut bytes = Vec::new();
    let mut limited = file.take(MAX_CATALOG_BYTES + 1);
    limited.read_to_end(&mut bytes).map_err(|err| CatalogError::Io(err.to_string()))?;
    let size = u64::try_from(bytes.len()).map_err(|_| {
        CatalogError::Invalid("catalog input size exceeds addressable memory".to_string())
    })?;
    if size > MAX_CATALOG_BYTES {
        return Err(CatalogError::Invalid(format!(
            "catalog input exceeds {MAX_CATALOG_BYTES} bytes"
        )));
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::error::CatalogError;
    use crate::types::ComponentCatalog;

    #[test]
    fn path_and_parameter_accessors_are_ordered() -> Result<(), CatalogError> {
        let catalog = ComponentCatalog::from_slice(
            br#"{
                "version": "1.0",
                "components": [{
                    "scheme": "ftp",
                    "title": "FTP",
                    "description": "Transfers files over FTP.",
                    "syntax": "ftp:host:port/directoryName",
                    "options": [
                        {"name": "directoryName", "kind": "path", "type": "string",
                         "description": "Starting directory."},
                        {"name": "host", "kind": "path", "type": "string",
                         "required": true, "description": "FTP server host."},
                        {"name": "port", "kind": "path", "type": "integer",
                         "required": true, "description": "FTP server port."},
                        {"name": "passiveMode", "kind": "parameter", "type": "boolean",
                         "default": false, "description": "Use passive mode connections."},
                        {"name": "binary", "kind": "parameter", "type": "boolean",
                         "default": false, "description": "Transfer in binary mode."}
                    ]
                }]
            }"#,
        )?;
        catalog.validate()?;
        let component = catalog
            .component("ftp")
            .ok_or_else(|| CatalogError::Invalid("missing ftp component".to_string()))?;
        assert_eq!(component.syntax_tokens(), ["host", "port", "directoryName"]);
        assert_eq!(
            component.syntax_segments(),
            [(None, "host"), (Some(':'), "port"), (Some('/'), "directoryName")]
        );
        let paths: Vec<&str> =
            component.path_options().iter().map(|option| option.name.as_str()).collect();
        assert_eq!(paths, ["host", "port", "directoryName"]);
        let parameters: Vec<&str> =
            component.parameter_options().iter().map(|option| option.name.as_str()).collect();
        assert_eq!(parameters, ["binary", "passiveMode"]);
        Ok(())
    }
}
