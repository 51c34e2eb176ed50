// crates/wireroute-gen/src/lib.rs
// ============================================================================
// Module: DSL Generator Library
// Description: Deterministic generator for Wireroute endpoint builders.
// Purpose: Render typed builder modules and docs from the component catalog.
// Dependencies: wireroute-catalog, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate generates the typed endpoint builder surface from the canonical
//! `catalog/components.json` contract. For every component schema it renders
//! a Rust module holding a fluent builder whose setters forward into the
//! `wireroute-endpoint` sink, plus an aggregating `lib.rs` and a markdown
//! component reference.
//!
//! ### Design Notes
//! - Output is deterministic: path setters follow syntax order, parameter
//!   setters and module declarations sort by name, and doc text is taken
//!   verbatim from the catalog.
//! - The generator never invents semantics: every rendered identifier, type,
//!   and doc line traces back to a validated catalog field.
//! - Generated files carry an `@generated` header naming this generator and
//!   the catalog source so drift is attributable.
//!
//! ## Index
//! - Public API: [`DslGenerator`], [`GeneratedFile`], [`DslGenError`],
//!   [`DEFAULT_CATALOG_PATH`]
//! - Rendering: builder modules, aggregate module, markdown (private)
//! - Naming: snake/pascal case mapping, keyword escaping (private)

use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;
use wireroute_catalog::ComponentCatalog;
use wireroute_catalog::ComponentSpec;
use wireroute_catalog::OptionKind;
use wireroute_catalog::OptionSpec;
use wireroute_catalog::OptionType;

// ============================================================================
// SECTION: Public API
// ============================================================================

// ============================================================================
// CONSTANTS: Catalog input defaults
// ============================================================================

/// Default catalog path relative to the workspace root.
pub const DEFAULT_CATALOG_PATH: &str = "catalog/components.json";

/// Errors raised by the DSL generator.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
///
/// # Examples
/// ```
/// use wireroute_gen::DslGenError;
///
/// let err = DslGenError::Catalog("missing catalog".to_string());
/// assert!(matches!(err, DslGenError::Catalog(message) if message == "missing catalog"));
/// ```
#[derive(Debug, Error)]
pub enum DslGenError {
    /// IO error while reading or writing files.
    #[error("io error: {0}")]
    Io(String),
    /// Catalog loading or validation error.
    #[error("catalog error: {0}")]
    Catalog(String),
    /// Requested component scheme is not in the catalog.
    #[error("unknown component scheme: {0}")]
    UnknownComponent(String),
    /// On-disk output differs from the generated content.
    #[error("generated output drift: {0}")]
    Drift(String),
}

/// A rendered output file produced by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub name: String,
    /// Rendered file content.
    pub content: String,
}

/// DSL generator loaded with a validated component catalog.
///
/// # Invariants
/// - The catalog held by a constructed generator has passed validation.
/// - Rendering is deterministic for a fixed catalog.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
///
/// use wireroute_gen::DEFAULT_CATALOG_PATH;
/// use wireroute_gen::DslGenerator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
/// let workspace_root = manifest_dir
///     .parent()
///     .and_then(std::path::Path::parent)
///     .ok_or_else(|| std::io::Error::other("missing workspace root"))?;
/// let generator = DslGenerator::load(workspace_root.join(DEFAULT_CATALOG_PATH))?;
/// let module = generator.generate_component("kafka")?;
/// assert!(module.contains("pub struct KafkaEndpointBuilder"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DslGenerator {
    /// Path to the catalog backing this generator.
    catalog_path: PathBuf,
    /// Validated component catalog used for rendering.
    catalog: ComponentCatalog,
}

impl DslGenerator {
    /// Loads and validates the component catalog at the given path.
    ///
    /// # Errors
    /// Returns [`DslGenError`] when the catalog cannot be read, parsed, or
    /// validated.
    pub fn load(catalog_path: impl AsRef<Path>) -> Result<Self, DslGenError> {
        let catalog_path = catalog_path.as_ref().to_path_buf();
        let catalog = ComponentCatalog::load(&catalog_path)
            .map_err(|err| DslGenError::Catalog(err.to_string()))?;
        catalog.validate().map_err(|err| DslGenError::Catalog(err.to_string()))?;
        Ok(Self {
            catalog_path,
            catalog,
        })
    }

    /// Returns the catalog path used by the generator.
    #[must_use]
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Returns the validated catalog.
    #[must_use]
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Generates the builder module for one component scheme.
    ///
    /// # Errors
    /// Returns [`DslGenError::UnknownComponent`] when the scheme is not in
    /// the catalog.
    pub fn generate_component(&self, scheme: &str) -> Result<String, DslGenError> {
        let component = self
            .catalog
            .component(scheme)
            .ok_or_else(|| DslGenError::UnknownComponent(scheme.to_string()))?;
        Ok(render_component(component))
    }

    /// Generates the aggregating `lib.rs` for the builder crate.
    #[must_use]
    pub fn generate_lib(&self) -> String {
        render_lib(&self.catalog)
    }

    /// Generates the markdown component reference.
    #[must_use]
    pub fn generate_markdown(&self) -> String {
        render_markdown(&self.catalog)
    }

    /// Generates every output file, `lib.rs` first, then modules sorted by
    /// module name.
    #[must_use]
    pub fn generated_files(&self) -> Vec<GeneratedFile> {
        let mut files = vec![GeneratedFile {
            name: "lib.rs".to_string(),
            content: self.generate_lib(),
        }];
        let mut components: Vec<&ComponentSpec> = self.catalog.components.iter().collect();
        components.sort_by_key(|component| module_name(&component.scheme));
        for component in components {
            files.push(GeneratedFile {
                name: format!("{}.rs", module_name(&component.scheme)),
                content: render_component(component),
            });
        }
        files
    }
}

// ============================================================================
// SECTION: Builder Module Rendering
// ============================================================================

/// Renders the `@generated` header shared by all Rust outputs.
fn render_generated_header(out: &mut String) {
    out.push_str("// @generated by wireroute-gen from ");
    out.push_str(DEFAULT_CATALOG_PATH);
    out.push_str(". DO NOT EDIT.\n");
}

/// Renders a complete builder module for a component.
#[allow(
    clippy::too_many_lines,
    reason = "Generator output is assembled in one pass for determinism."
)]
fn render_component(component: &ComponentSpec) -> String {
    let builder = builder_name(&component.scheme);
    let paths = component.path_options();
    let parameters = component.parameter_options();
    let mut out = String::new();

    render_generated_header(&mut out);
    out.push_str("// Component: ");
    out.push_str(&component.scheme);
    out.push_str(" (");
    out.push_str(&component.title);
    out.push_str(")\n\n");
    out.push_str("//! ");
    out.push_str(&normalize_doc(&component.description));
    out.push_str("\n\n");
    out.push_str("use wireroute_endpoint::EndpointBuilder;\n");
    out.push_str("use wireroute_endpoint::EndpointParams;\n\n");

    out.push_str("/// Fluent endpoint builder for the `");
    out.push_str(&component.scheme);
    out.push_str("` component.\n///\n/// ");
    out.push_str(&normalize_doc(&component.description));
    out.push('\n');
    if component.deprecated {
        out.push_str("#[deprecated(note = \"deprecated in the component catalog\")]\n");
    }
    out.push_str("#[derive(Debug, Clone)]\n");
    out.push_str("pub struct ");
    out.push_str(&builder);
    out.push_str(" {\n");
    for option in &paths {
        out.push_str("    /// ");
        out.push_str(&normalize_doc(&option.description));
        out.push('\n');
        out.push_str("    ");
        out.push_str(&field_name(&option.name));
        out.push_str(": ");
        out.push_str(&field_type(option));
        out.push_str(",\n");
    }
    out.push_str("    /// Shared parameter sink collecting the configured properties.\n");
    out.push_str("    params: EndpointParams,\n");
    out.push_str("}\n\n");

    out.push_str("impl ");
    out.push_str(&builder);
    out.push_str(" {\n");
    render_constructor(&mut out, &paths);
    for option in &paths {
        render_path_setter(&mut out, option);
    }
    for option in &parameters {
        render_parameter_setter(&mut out, option);
    }
    render_rebuild(&mut out, component);
    out.push_str("}\n\n");

    out.push_str("impl EndpointBuilder for ");
    out.push_str(&builder);
    out.push_str(" {\n");
    out.push_str("    fn scheme(&self) -> &'static str {\n");
    out.push_str("        \"");
    out.push_str(&component.scheme);
    out.push_str("\"\n");
    out.push_str("    }\n\n");
    out.push_str("    fn params(&self) -> &EndpointParams {\n");
    out.push_str("        &self.params\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}

/// Renders the `new` constructor taking the required path segments.
fn render_constructor(out: &mut String, paths: &[&OptionSpec]) {
    out.push_str("    /// Creates a builder from the required path segments.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn new(");
    let required: Vec<&&OptionSpec> = paths.iter().filter(|option| option.required).collect();
    for (index, option) in required.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&field_name(&option.name));
        out.push_str(": ");
        out.push_str(&argument_type(option.data_type));
    }
    out.push_str(") -> Self {\n");
    out.push_str("        let mut builder = Self {\n");
    for option in paths {
        out.push_str("            ");
        out.push_str(&field_name(&option.name));
        if option.required {
            if option.data_type == OptionType::String {
                out.push_str(": ");
                out.push_str(&field_name(&option.name));
                out.push_str(".into()");
            }
        } else {
            out.push_str(": None");
        }
        out.push_str(",\n");
    }
    out.push_str("            params: EndpointParams::new(),\n");
    out.push_str("        };\n");
    out.push_str("        builder.rebuild();\n");
    out.push_str("        builder\n");
    out.push_str("    }\n\n");
}

/// Renders a fluent setter for a path option.
fn render_path_setter(out: &mut String, option: &OptionSpec) {
    render_setter_docs(out, option);
    render_setter_attributes(out, option);
    let name = field_name(&option.name);
    out.push_str("    pub fn ");
    out.push_str(&name);
    out.push_str("(mut self, ");
    out.push_str(&name);
    out.push_str(": ");
    out.push_str(&argument_type(option.data_type));
    out.push_str(") -> Self {\n");
    out.push_str("        self.");
    out.push_str(&name);
    out.push_str(" = ");
    let value = if option.data_type == OptionType::String {
        format!("{name}.into()")
    } else {
        name.clone()
    };
    if option.required {
        out.push_str(&value);
    } else {
        out.push_str("Some(");
        out.push_str(&value);
        out.push(')');
    }
    out.push_str(";\n");
    out.push_str("        self.rebuild();\n");
    out.push_str("        self\n");
    out.push_str("    }\n\n");
}

/// Renders a fluent setter forwarding a query parameter to the sink.
fn render_parameter_setter(out: &mut String, option: &OptionSpec) {
    render_setter_docs(out, option);
    render_setter_attributes(out, option);
    let name = field_name(&option.name);
    out.push_str("    pub fn ");
    out.push_str(&name);
    out.push_str("(mut self, ");
    out.push_str(&name);
    out.push_str(": ");
    out.push_str(&argument_type(option.data_type));
    out.push_str(") -> Self {\n");
    out.push_str("        self.params.property(\"");
    out.push_str(&option.name);
    out.push_str("\", ");
    out.push_str(&name);
    if option.data_type == OptionType::String {
        out.push_str(".into()");
    }
    out.push_str(");\n");
    out.push_str("        self\n");
    out.push_str("    }\n\n");
}

/// Renders the doc comment block for a setter.
fn render_setter_docs(out: &mut String, option: &OptionSpec) {
    out.push_str("    /// ");
    out.push_str(&normalize_doc(&option.description));
    out.push('\n');
    let mut extras = Vec::new();
    if !option.enum_values.is_empty() {
        let values: Vec<String> =
            option.enum_values.iter().map(|value| format!("`{value}`")).collect();
        extras.push(format!("Accepted values: {}.", values.join(", ")));
    }
    if let Some(default) = &option.default {
        extras.push(format!("Default: `{}`.", default_literal(default)));
    }
    if option.secret {
        extras.push("This value is a credential.".to_string());
    }
    if !extras.is_empty() {
        out.push_str("    ///\n");
        for extra in extras {
            out.push_str("    /// ");
            out.push_str(&extra);
            out.push('\n');
        }
    }
}

/// Renders the attribute lines shared by all setters.
fn render_setter_attributes(out: &mut String, option: &OptionSpec) {
    if option.deprecated {
        out.push_str("    #[deprecated(note = \"deprecated in the component catalog\")]\n");
    }
    out.push_str("    #[must_use]\n");
}

/// Renders the private `rebuild` method reassembling the URL portion.
fn render_rebuild(out: &mut String, component: &ComponentSpec) {
    out.push_str("    /// Rebuilds the URL portion from the path segments.\n");
    out.push_str("    fn rebuild(&mut self) {\n");
    out.push_str("        let mut url = String::new();\n");
    for (separator, token) in component.syntax_segments() {
        let Some(option) = component
            .options
            .iter()
            .find(|option| option.kind == OptionKind::Path && option.name == token)
        else {
            continue;
        };
        let name = field_name(&option.name);
        if option.required {
            if let Some(separator) = separator {
                out.push_str("        url.push('");
                out.push(separator);
                out.push_str("');\n");
            }
            if option.data_type == OptionType::String {
                out.push_str("        url.push_str(&self.");
                out.push_str(&name);
                out.push_str(");\n");
            } else {
                out.push_str("        url.push_str(&self.");
                out.push_str(&name);
                out.push_str(".to_string());\n");
            }
        } else {
            out.push_str("        if let Some(");
            out.push_str(&name);
            out.push_str(") = &self.");
            out.push_str(&name);
            out.push_str(" {\n");
            if let Some(separator) = separator {
                out.push_str("            url.push('");
                out.push(separator);
                out.push_str("');\n");
            }
            if option.data_type == OptionType::String {
                out.push_str("            url.push_str(");
                out.push_str(&name);
                out.push_str(");\n");
            } else {
                out.push_str("            url.push_str(&");
                out.push_str(&name);
                out.push_str(".to_string());\n");
            }
            out.push_str("        }\n");
        }
    }
    out.push_str("        self.params.url(url);\n");
    out.push_str("    }\n");
}

// ============================================================================
// SECTION: Aggregate Module Rendering
// ============================================================================

/// Renders the aggregating `lib.rs` for the generated builder crate.
fn render_lib(catalog: &ComponentCatalog) -> String {
    let mut out = String::new();
    render_generated_header(&mut out);
    out.push('\n');
    out.push_str("//! Generated endpoint builders for the Wireroute component catalog.\n");
    out.push_str("//!\n");
    out.push_str("//! Each module holds one component's fluent builder. Builders forward\n");
    out.push_str("//! typed setters into the shared `wireroute-endpoint` sink; call `to_uri`\n");
    out.push_str("//! from `wireroute_endpoint::EndpointBuilder` to assemble the endpoint\n");
    out.push_str("//! URI.\n\n");
    let mut schemes: Vec<&str> =
        catalog.components.iter().map(|component| component.scheme.as_str()).collect();
    schemes.sort_by_key(|scheme| module_name(scheme));
    for scheme in &schemes {
        out.push_str("pub mod ");
        out.push_str(&module_name(scheme));
        out.push_str(";\n");
    }
    out.push('\n');
    for scheme in &schemes {
        out.push_str("pub use ");
        out.push_str(&module_name(scheme));
        out.push_str("::");
        out.push_str(&builder_name(scheme));
        out.push_str(";\n");
    }
    out
}

// ============================================================================
// SECTION: Markdown Rendering
// ============================================================================

/// Renders the markdown component reference.
fn render_markdown(catalog: &ComponentCatalog) -> String {
    let mut out = String::new();
    out.push_str("# Wireroute Component Reference\n\n");
    out.push_str("<!-- @generated by wireroute-gen from ");
    out.push_str(DEFAULT_CATALOG_PATH);
    out.push_str(". DO NOT EDIT. -->\n\n");
    out.push_str("Catalog version: ");
    out.push_str(&catalog.version);
    out.push('\n');
    for component in &catalog.components {
        out.push('\n');
        out.push_str("## ");
        out.push_str(&component.title);
        out.push_str(" (`");
        out.push_str(&component.scheme);
        out.push_str("`)\n\n");
        out.push_str(&normalize_doc(&component.description));
        out.push_str("\n\n");
        out.push_str("Endpoint syntax: `");
        out.push_str(&component.syntax);
        out.push_str("`\n");
        render_markdown_paths(&mut out, &component.path_options());
        render_markdown_parameters(&mut out, &component.parameter_options());
    }
    out
}

/// Renders the path segment table for one component.
fn render_markdown_paths(out: &mut String, paths: &[&OptionSpec]) {
    if paths.is_empty() {
        return;
    }
    out.push_str("\n### Path segments\n\n");
    out.push_str("| Name | Type | Required | Description |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for option in paths {
        out.push_str("| `");
        out.push_str(&option.name);
        out.push_str("` | ");
        out.push_str(type_label(option.data_type));
        out.push_str(" | ");
        out.push_str(if option.required { "yes" } else { "no" });
        out.push_str(" | ");
        out.push_str(&markdown_description(option));
        out.push_str(" |\n");
    }
}

/// Renders the query parameter table for one component.
fn render_markdown_parameters(out: &mut String, parameters: &[&OptionSpec]) {
    if parameters.is_empty() {
        return;
    }
    out.push_str("\n### Query parameters\n\n");
    out.push_str("| Name | Type | Default | Description |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for option in parameters {
        out.push_str("| `");
        out.push_str(&option.name);
        out.push_str("` | ");
        out.push_str(type_label(option.data_type));
        out.push_str(" | ");
        if let Some(default) = &option.default {
            out.push('`');
            out.push_str(&default_literal(default));
            out.push('`');
        }
        out.push_str(" | ");
        out.push_str(&markdown_description(option));
        out.push_str(" |\n");
    }
}

/// Renders an option description with secret/deprecated markers.
fn markdown_description(option: &OptionSpec) -> String {
    let mut description = normalize_doc(&option.description);
    if !option.enum_values.is_empty() {
        let values: Vec<String> =
            option.enum_values.iter().map(|value| format!("`{value}`")).collect();
        description.push_str(&format!(" One of: {}.", values.join(", ")));
    }
    if option.secret {
        description.push_str(" (secret)");
    }
    if option.deprecated {
        description.push_str(" (deprecated)");
    }
    description
}

// ============================================================================
// SECTION: Naming Helpers
// ============================================================================

/// Rust keywords that must not be used as bare method or field names.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

/// Maps a component scheme to its generated module name.
#[must_use]
pub fn module_name(scheme: &str) -> String {
    escape_keyword(scheme.replace(['-', '+', '.'], "_"))
}

/// Maps a component scheme to its generated builder type name.
#[must_use]
pub fn builder_name(scheme: &str) -> String {
    format!("{}EndpointBuilder", pascal_case(scheme))
}

/// Maps an option name to its generated method and field name.
#[must_use]
pub fn field_name(option: &str) -> String {
    escape_keyword(snake_case(option))
}

/// Appends an underscore when the identifier collides with a Rust keyword.
fn escape_keyword(identifier: String) -> String {
    if RUST_KEYWORDS.contains(&identifier.as_str()) {
        format!("{identifier}_")
    } else {
        identifier
    }
}

/// Converts a camelCase or separator-delimited name to snake_case.
fn snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower = false;
    for ch in input.chars() {
        if matches!(ch, '.' | '-' | '_') {
            out.push('_');
            prev_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// Converts a separator-delimited scheme to PascalCase.
fn pascal_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = true;
    for ch in input.chars() {
        if matches!(ch, '.' | '-' | '+' | '_') {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

// ============================================================================
// SECTION: Type and Doc Helpers
// ============================================================================

/// Returns the Rust argument type for an option data type.
fn argument_type(data_type: OptionType) -> &'static str {
    match data_type {
        OptionType::String => "impl Into<String>",
        OptionType::Boolean => "bool",
        OptionType::Integer => "i64",
        OptionType::Double => "f64",
    }
}

/// Returns the builder field type for a path option.
fn field_type(option: &OptionSpec) -> String {
    let base = match option.data_type {
        OptionType::String => "String",
        OptionType::Boolean => "bool",
        OptionType::Integer => "i64",
        OptionType::Double => "f64",
    };
    if option.required {
        base.to_string()
    } else {
        format!("Option<{base}>")
    }
}

/// Returns the lowercase label for an option data type.
fn type_label(data_type: OptionType) -> &'static str {
    match data_type {
        OptionType::String => "string",
        OptionType::Boolean => "boolean",
        OptionType::Integer => "integer",
        OptionType::Double => "double",
    }
}

/// Renders a default JSON value as a doc literal.
fn default_literal(default: &Value) -> String {
    match default {
        Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}

/// Collapses internal whitespace in catalog doc text.
fn normalize_doc(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::builder_name;
    use super::field_name;
    use super::module_name;

    #[test]
    fn scheme_names_map_to_rust_identifiers() {
        assert_eq!(module_name("aws-s3"), "aws_s3");
        assert_eq!(module_name("paho+ssl"), "paho_ssl");
        assert_eq!(builder_name("aws-s3"), "AwsS3EndpointBuilder");
        assert_eq!(builder_name("timer"), "TimerEndpointBuilder");
    }

    #[test]
    fn option_names_map_to_snake_case() {
        assert_eq!(field_name("maxPollRecords"), "max_poll_records");
        assert_eq!(field_name("requestTimeoutMs"), "request_timeout_ms");
        assert_eq!(field_name("uriEndpointOverride"), "uri_endpoint_override");
        assert_eq!(field_name("readLock"), "read_lock");
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(field_name("type"), "type_");
        assert_eq!(field_name("ref"), "ref_");
        assert_eq!(module_name("loop"), "loop_");
    }
}
