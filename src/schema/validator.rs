//! TOML schema validator
//!
//! Rejects descriptors the generator must never see: malformed names,
//! duplicate declarations, unknown markers and class-only markers placed on
//! fields.

use crate::model::Marker;
use crate::schema::toml_types::*;
use std::collections::HashSet;
use std::str::FromStr;

/// Java keywords and literals that cannot name a class, package segment or field
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null", "_",
];

/// Validate every class of a round together
pub fn validate_classes(classes: &[ClassConfig]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut class_names = HashSet::new();

    for class in classes {
        if !class_names.insert(class.name.as_str()) {
            result.add_error(
                format!("Duplicate class: {}", class.name),
                Some(class.name.clone()),
                ValidationErrorType::DuplicateClass,
            );
        }
        result.merge(validate_class(class));
    }

    result
}

/// Validate a single class configuration
pub fn validate_class(class: &ClassConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    validate_class_name(class, &mut result);
    let class_markers = validate_markers(&class.markers, &class.name, false, &mut result);
    validate_supertypes(class, &mut result);

    let mut field_names = HashSet::new();
    let mut field_marked = false;
    for field in &class.fields {
        let location = format!("{}.{}", class.name, field.name);

        if !field_names.insert(field.name.as_str()) {
            result.add_error(
                format!("Duplicate field name: {}", field.name),
                Some(location.clone()),
                ValidationErrorType::DuplicateField,
            );
        }
        validate_identifier(&field.name, "Field", &location, &mut result);

        if field.r#type.trim().is_empty() {
            result.add_error(
                format!("Field '{}' has no type", field.name),
                Some(location.clone()),
                ValidationErrorType::InvalidType,
            );
        }

        let markers = validate_markers(&field.markers, &location, true, &mut result);
        if !markers.is_empty() && field.is_static() {
            result.add_warning(format!(
                "Markers on static field '{location}' are ignored; static fields are never generated"
            ));
        } else if !markers.is_empty() {
            field_marked = true;
        }
    }

    if class_markers.is_empty() && !field_marked {
        result.add_warning(format!(
            "Class '{}' carries no markers and generates nothing",
            class.name
        ));
    }

    result
}

fn validate_class_name(class: &ClassConfig, result: &mut ValidationResult) {
    if class.name.is_empty() {
        result.add_error(
            "Class name cannot be empty".to_string(),
            None,
            ValidationErrorType::InvalidName,
        );
        return;
    }

    for segment in class.name.split('.') {
        validate_identifier(segment, "Class name segment", &class.name, result);
    }

    if let Some(package) = &class.package {
        let contains_class = package.is_empty()
            || class
                .name
                .strip_prefix(package.as_str())
                .is_some_and(|rest| rest.starts_with('.') && rest.len() > 1);
        if !contains_class {
            result.add_error(
                format!("Package '{}' does not enclose class '{}'", package, class.name),
                Some(format!("{}.package", class.name)),
                ValidationErrorType::InvalidName,
            );
        }
    }
}

fn validate_supertypes(class: &ClassConfig, result: &mut ValidationResult) {
    let supertypes = class.extends.iter().chain(class.implements.iter());
    for supertype in supertypes {
        if supertype.trim().is_empty() {
            result.add_error(
                format!("Class '{}' names an empty supertype", class.name),
                Some(class.name.clone()),
                ValidationErrorType::InvalidType,
            );
        }
    }
}

/// Check a Java identifier: non-empty, legal characters, not reserved
fn validate_identifier(ident: &str, what: &str, location: &str, result: &mut ValidationResult) {
    if ident.is_empty() {
        result.add_error(
            format!("{what} cannot be empty"),
            Some(location.to_string()),
            ValidationErrorType::InvalidName,
        );
        return;
    }

    let mut chars = ident.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
    let rest_ok = chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if !starts_ok || !rest_ok {
        result.add_error(
            format!("{what} '{ident}' is not a valid identifier"),
            Some(location.to_string()),
            ValidationErrorType::InvalidName,
        );
    }

    if RESERVED_WORDS.contains(&ident) {
        result.add_error(
            format!("{what} '{ident}' is a reserved word"),
            Some(location.to_string()),
            ValidationErrorType::InvalidName,
        );
    }
}

/// Parse marker names, recording problems; returns the recognised markers
fn validate_markers(
    names: &[String],
    location: &str,
    on_field: bool,
    result: &mut ValidationResult,
) -> Vec<Marker> {
    let mut markers = Vec::new();

    for name in names {
        let Ok(marker) = Marker::from_str(name) else {
            result.add_error(
                format!("Unknown marker: {name}"),
                Some(location.to_string()),
                ValidationErrorType::UnknownMarker,
            );
            continue;
        };

        if on_field && !marker.allowed_on_field() {
            result.add_error(
                format!("Marker '{marker}' applies to classes only"),
                Some(location.to_string()),
                ValidationErrorType::MarkerNotAllowedOnField,
            );
            continue;
        }

        if markers.contains(&marker) {
            result.add_warning(format!("Marker '{marker}' repeated at '{location}'"));
            continue;
        }
        markers.push(marker);
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: &str, markers: &[&str]) -> FieldConfig {
        FieldConfig {
            name: name.to_string(),
            r#type: ty.to_string(),
            r#static: None,
            modifiers: None,
            initializer: None,
            markers: markers.iter().map(ToString::to_string).collect(),
        }
    }

    fn class(name: &str, markers: &[&str], fields: Vec<FieldConfig>) -> ClassConfig {
        ClassConfig {
            name: name.to_string(),
            package: None,
            markers: markers.iter().map(ToString::to_string).collect(),
            extends: None,
            implements: Vec::new(),
            fields,
        }
    }

    #[test]
    fn test_validate_valid_class() {
        let class = class(
            "com.example.TestModel",
            &["AllArgsConstructor", "Getter", "Setter", "ToString"],
            vec![
                field("name", "String", &[]),
                field("age", "int", &[]),
                field("active", "boolean", &[]),
            ],
        );

        let result = validate_class(&class);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_duplicate_fields() {
        let class = class(
            "a.User",
            &["Getter"],
            vec![field("id", "long", &[]), field("id", "String", &[])],
        );

        let result = validate_class(&class);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.error_type == ValidationErrorType::DuplicateField));
    }

    #[test]
    fn test_validate_class_only_marker_on_field() {
        let class = class(
            "a.User",
            &[],
            vec![field("id", "long", &["ToString"]), field("name", "String", &["Getter"])],
        );

        let result = validate_class(&class);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.errors[0].error_type,
            ValidationErrorType::MarkerNotAllowedOnField
        );
        assert_eq!(result.errors[0].location.as_deref(), Some("a.User.id"));
    }

    #[test]
    fn test_validate_unknown_marker() {
        let class = class("a.User", &["Data"], vec![field("id", "long", &[])]);
        let result = validate_class(&class);
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].error_type, ValidationErrorType::UnknownMarker);
    }

    #[test]
    fn test_validate_reserved_and_malformed_names() {
        let class = class(
            "a.User",
            &["Getter"],
            vec![field("class", "int", &[]), field("2nd", "int", &[])],
        );
        let result = validate_class(&class);
        assert_eq!(result.errors.len(), 2);
        assert!(result
            .errors
            .iter()
            .all(|e| e.error_type == ValidationErrorType::InvalidName));
    }

    #[test]
    fn test_validate_package_must_enclose_class() {
        let mut bad = class("com.example.User", &["Getter"], Vec::new());
        bad.package = Some("org.other".to_string());
        assert!(!validate_class(&bad).is_valid);

        let mut nested = class("com.example.Outer.Inner", &["Getter"], Vec::new());
        nested.package = Some("com.example".to_string());
        assert!(validate_class(&nested).is_valid);
    }

    #[test]
    fn test_unmarked_class_warns() {
        let class = class("a.Plain", &[], vec![field("id", "long", &[])]);
        let result = validate_class(&class);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_static_field_marker_warns() {
        let mut counter = field("COUNT", "int", &["Getter"]);
        counter.r#static = Some(true);
        let class = class("a.Registry", &["ToString"], vec![counter]);

        let result = validate_class(&class);
        assert!(result.is_valid);
        assert!(result.warnings[0].contains("a.Registry.COUNT"));
    }

    #[test]
    fn test_validate_empty_supertype() {
        let mut class = class("a.User", &["Getter"], vec![field("id", "long", &[])]);
        class.extends = Some("  ".to_string());
        class.implements = vec!["java.io.Serializable".to_string(), String::new()];

        let result = validate_class(&class);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result
            .errors
            .iter()
            .all(|e| e.error_type == ValidationErrorType::InvalidType));
    }

    #[test]
    fn test_repeated_marker_warns() {
        let class = class(
            "a.User",
            &["Getter", "Getter"],
            vec![field("id", "long", &["Setter", "Setter"])],
        );

        let result = validate_class(&class);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("'Getter' repeated at 'a.User'"));
        assert!(result.warnings[1].contains("'Setter' repeated at 'a.User.id'"));
    }

    #[test]
    fn test_validate_duplicate_classes() {
        let classes = vec![
            class("a.User", &["Getter"], Vec::new()),
            class("a.User", &["Setter"], Vec::new()),
        ];
        let result = validate_classes(&classes);
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].error_type, ValidationErrorType::DuplicateClass);
    }
}
