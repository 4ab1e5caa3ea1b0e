//! TOML schema type definitions
//!
//! This module defines the Serde types used for parsing class descriptor files.

use crate::config::GeneratorConfig;
use serde::{Deserialize, Serialize};

/// Root of one descriptor file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SchemaFile {
    pub generator: Option<GeneratorConfig>,
    #[serde(rename = "class", default)]
    pub classes: Vec<ClassConfig>,
}

/// Class configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassConfig {
    /// Qualified class name
    pub name: String,
    pub package: Option<String>,
    #[serde(default)]
    pub markers: Vec<String>,
    pub extends: Option<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(rename = "field", default)]
    pub fields: Vec<FieldConfig>,
}

/// Field configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldConfig {
    pub name: String,
    pub r#type: String,
    pub r#static: Option<bool>,
    pub modifiers: Option<Vec<String>>,
    pub initializer: Option<String>,
    #[serde(default)]
    pub markers: Vec<String>,
}

impl FieldConfig {
    pub fn is_static(&self) -> bool {
        self.r#static.unwrap_or(false)
            || self
                .modifiers
                .as_ref()
                .is_some_and(|mods| mods.iter().any(|m| m == "static"))
    }
}

/// Validation result
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
}

/// Validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
    /// Where the problem is (e.g. `com.example.Point.x`)
    pub location: Option<String>,
    pub error_type: ValidationErrorType,
}

/// Validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationErrorType {
    InvalidName,
    InvalidType,
    DuplicateField,
    DuplicateClass,
    UnknownMarker,
    MarkerNotAllowedOnField,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} (at {})", self.message, location),
            None => f.write_str(&self.message),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(
        &mut self,
        message: String,
        location: Option<String>,
        error_type: ValidationErrorType,
    ) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            message,
            location,
            error_type,
        });
    }

    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Fold another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}
