// crates/wireroute-catalog/src/validate.rs
// ============================================================================
// Module: Catalog Validation
// Description: Strict cross-field validation for component catalogs.
// Purpose: Guarantee a validated catalog renders into well-formed builders.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Validation rules for [`ComponentCatalog`]. The rules are strict and fail
//! closed: every generated identifier, doc comment, and URI fragment traces
//! back to a catalog field, so a catalog that validates cleanly cannot
//! produce malformed output downstream.

use serde_json::Value;

use crate::error::CatalogError;
use crate::types::ComponentCatalog;
use crate::types::ComponentSpec;
use crate::types::OptionKind;
use crate::types::OptionSpec;
use crate::types::OptionType;

// ============================================================================
// SECTION: Catalog Validation
// ============================================================================

impl ComponentCatalog {
    /// Validates the catalog against all structural rules.
    ///
    /// # Errors
    /// Returns [`CatalogError::Invalid`] naming the first violation, with
    /// the offending component scheme and option where applicable.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.version.is_empty() {
            return Err(CatalogError::Invalid("catalog version is empty".to_string()));
        }
        if self.components.is_empty() {
            return Err(CatalogError::Invalid("catalog has no components".to_string()));
        }
        for (index, component) in self.components.iter().enumerate() {
            if self.components[.. index].iter().any(|other| other.scheme == component.scheme) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate component scheme {:?}",
                    component.scheme
                )));
            }
            validate_component(component)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Component Rules
// ============================================================================

/// Validates a single component schema.
fn validate_component(component: &ComponentSpec) -> Result<(), CatalogError> {
    let scheme = &component.scheme;
    if !valid_scheme(scheme) {
        return Err(CatalogError::Invalid(format!("invalid component scheme {scheme:?}")));
    }
    if component.title.is_empty() {
        return Err(CatalogError::Invalid(format!("component {scheme}: title is empty")));
    }
    if component.description.is_empty() {
        return Err(CatalogError::Invalid(format!("component {scheme}: description is empty")));
    }
    if !component.syntax.starts_with(&format!("{scheme}:")) {
        return Err(CatalogError::Invalid(format!(
            "component {scheme}: syntax {:?} does not start with the scheme",
            component.syntax
        )));
    }
    for (index, option) in component.options.iter().enumerate() {
        if component.options[.. index].iter().any(|other| other.name == option.name) {
            return Err(CatalogError::Invalid(format!(
                "component {scheme}: duplicate option {:?}",
                option.name
            )));
        }
        validate_option(scheme, option)?;
    }
    validate_syntax(component)
}

/// Validates the syntax template against the declared path options.
fn validate_syntax(component: &ComponentSpec) -> Result<(), CatalogError> {
    let scheme = &component.scheme;
    let tokens = component.syntax_tokens();
    if tokens.is_empty() {
        return Err(CatalogError::Invalid(format!(
            "component {scheme}: syntax {:?} has no path tokens",
            component.syntax
        )));
    }
    let mut seen_optional = false;
    for (index, token) in tokens.iter().enumerate() {
        if tokens[.. index].contains(token) {
            return Err(CatalogError::Invalid(format!(
                "component {scheme}: syntax repeats token {token:?}"
            )));
        }
        let Some(option) = component
            .options
            .iter()
            .find(|option| option.kind == OptionKind::Path && option.name == *token)
        else {
            return Err(CatalogError::Invalid(format!(
                "component {scheme}: syntax token {token:?} has no path option"
            )));
        };
        if option.required && seen_optional {
            return Err(CatalogError::Invalid(format!(
                "component {scheme}: required path option {token:?} follows an optional one"
            )));
        }
        if !option.required {
            seen_optional = true;
        }
    }
    for option in &component.options {
        if option.kind == OptionKind::Path && !tokens.contains(&option.name.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "component {scheme}: path option {:?} missing from syntax",
                option.name
            )));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Option Rules
// ============================================================================

/// Validates a single option schema.
fn validate_option(scheme: &str, option: &OptionSpec) -> Result<(), CatalogError> {
    let name = &option.name;
    if !valid_option_name(name) {
        return Err(CatalogError::Invalid(format!(
            "component {scheme}: invalid option name {name:?}"
        )));
    }
    if option.description.is_empty() {
        return Err(CatalogError::Invalid(format!(
            "component {scheme}: option {name}: description is empty"
        )));
    }
    if let Some(default) = &option.default {
        if option.required {
            return Err(CatalogError::Invalid(format!(
                "component {scheme}: option {name}: required option declares a default"
            )));
        }
        if !default_matches_type(default, option.data_type) {
            return Err(CatalogError::Invalid(format!(
                "component {scheme}: option {name}: default {default} does not match type"
            )));
        }
    }
    if !option.enum_values.is_empty() {
        if option.data_type != OptionType::String {
            return Err(CatalogError::Invalid(format!(
                "component {scheme}: option {name}: enum values require a string type"
            )));
        }
        for (index, value) in option.enum_values.iter().enumerate() {
            if value.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "component {scheme}: option {name}: empty enum value"
                )));
            }
            if option.enum_values[.. index].contains(value) {
                return Err(CatalogError::Invalid(format!(
                    "component {scheme}: option {name}: duplicate enum value {value:?}"
                )));
            }
        }
    }
    Ok(())
}

/// Checks whether a default JSON value matches the declared option type.
fn default_matches_type(default: &Value, data_type: OptionType) -> bool {
    match data_type {
        OptionType::String => default.is_string(),
        OptionType::Boolean => default.is_boolean(),
        OptionType::Integer => default.is_i64(),
        OptionType::Double => default.is_number(),
    }
}

// ============================================================================
// SECTION: Shape Helpers
// ============================================================================

/// Checks the component scheme shape.
///
/// Schemes are lowercase ASCII, starting with a letter, with `-` or `+`
/// allowed as interior separators.
fn valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '+')
}

/// Checks an option name for URI-safe transport.
///
/// Names start with an ASCII letter and continue with letters, digits, or
/// `.` / `_` / `-`; they travel unencoded as query keys.
fn valid_option_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
