//! TOML schema parser
//!
//! This module reads descriptor files and turns validated class
//! configurations into [`ClassDescriptor`]s.

use crate::error::{LombokError, LombokResult};
use crate::model::{ClassDescriptor, FieldDescriptor, Marker, TypeRef};
use crate::schema::toml_types::*;
use crate::schema::validator::validate_classes;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Parse a descriptor file from disk
pub fn parse_schema<P: AsRef<Path>>(path: P) -> LombokResult<SchemaFile> {
    let content = fs::read_to_string(&path).map_err(|e| {
        LombokError::Configuration(format!(
            "Failed to read schema file '{}': {}",
            path.as_ref().display(),
            e
        ))
    })?;

    let schema = parse_schema_from_str(&content)?;
    debug!(
        "Parsed {} class(es) from {}",
        schema.classes.len(),
        path.as_ref().display()
    );
    Ok(schema)
}

/// Parse a descriptor file from a TOML string
pub fn parse_schema_from_str(content: &str) -> LombokResult<SchemaFile> {
    toml::from_str(content)
        .map_err(|e| LombokError::Configuration(format!("Failed to parse TOML schema: {}", e)))
}

/// Parse several descriptor files, in the order given
pub fn load_schemas<P: AsRef<Path>>(paths: &[P]) -> LombokResult<Vec<SchemaFile>> {
    paths.iter().map(parse_schema).collect()
}

/// Validate every class of the given files together and build descriptors.
///
/// Warnings are logged; any error rejects the whole batch.
pub fn build_descriptors(schemas: &[SchemaFile]) -> LombokResult<Vec<ClassDescriptor>> {
    let classes: Vec<ClassConfig> = schemas
        .iter()
        .flat_map(|schema| schema.classes.iter().cloned())
        .collect();

    let result = validate_classes(&classes);
    for warning in &result.warnings {
        warn!("{warning}");
    }
    if !result.is_valid {
        return Err(LombokError::Validation(result.errors));
    }

    classes.iter().map(class_descriptor).collect()
}

impl SchemaFile {
    /// Validate and convert the classes of this file alone.
    pub fn into_descriptors(self) -> LombokResult<Vec<ClassDescriptor>> {
        build_descriptors(std::slice::from_ref(&self))
    }
}

/// Convert one class configuration.
///
/// Expects a validated configuration; unknown marker names still fail.
pub fn class_descriptor(config: &ClassConfig) -> LombokResult<ClassDescriptor> {
    let mut class = ClassDescriptor::new(&config.name)
        .with_markers(parse_markers(&config.markers, &config.name)?.into_iter().collect());

    if let Some(package) = &config.package {
        class = class.with_package(package);
    }
    class.superclass = config.extends.as_deref().map(TypeRef::from);
    class.interfaces = config.implements.iter().map(|i| TypeRef::from(i.as_str())).collect();

    for field in &config.fields {
        let location = format!("{}.{}", config.name, field.name);
        let mut modifiers = field
            .modifiers
            .clone()
            .unwrap_or_else(|| vec!["private".to_string()]);
        if field.is_static() && !modifiers.iter().any(|m| m == "static") {
            modifiers.push("static".to_string());
        }

        let mut descriptor =
            FieldDescriptor::new(&field.name, field.r#type.as_str()).with_modifiers(modifiers);
        descriptor.initializer = field.initializer.clone();
        for marker in parse_markers(&field.markers, &location)? {
            descriptor = descriptor.with_marker(marker);
        }
        class = class.with_field(descriptor);
    }

    Ok(class)
}

fn parse_markers(names: &[String], location: &str) -> LombokResult<Vec<Marker>> {
    names
        .iter()
        .map(|name| {
            Marker::from_str(name).map_err(|_| {
                LombokError::Validation(vec![ValidationError {
                    message: format!("Unknown marker: {name}"),
                    location: Some(location.to_string()),
                    error_type: ValidationErrorType::UnknownMarker,
                }])
            })
        })
        .collect()
}
