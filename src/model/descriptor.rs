use crate::model::marker::{ClassMarkers, Marker};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// The primitive type that selects the `is` accessor prefix.
pub const BOOLEAN_PRIMITIVE: &str = "boolean";

/// Declared type of a field, kept as the host spelled it.
///
/// The text is emitted verbatim; qualified and generic names are never
/// rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the primitive `boolean`, never for `java.lang.Boolean`.
    pub fn is_boolean_primitive(&self) -> bool {
        self.0.trim() == BOOLEAN_PRIMITIVE
    }
}

impl From<&str> for TypeRef {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

///
/// FieldDescriptor
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeRef,
    pub is_static: bool,
    /// Declared modifiers, re-emitted when the class is augmented in place.
    pub modifiers: Vec<String>,
    /// Initializer expression, re-emitted alongside the modifiers.
    pub initializer: Option<String>,
    pub has_read_marker: bool,
    pub has_write_marker: bool,
}

impl FieldDescriptor {
    /// A private instance field without field-level markers.
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_static: false,
            modifiers: vec!["private".to_string()],
            initializer: None,
            has_read_marker: false,
            has_write_marker: false,
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        match marker {
            Marker::Getter => self.has_read_marker = true,
            Marker::Setter => self.has_write_marker = true,
            Marker::AllArgsConstructor | Marker::ToString => {}
        }
        self
    }

    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self.is_static = self.modifiers.iter().any(|m| m == "static");
        self
    }

    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    pub fn is_boolean_primitive(&self) -> bool {
        self.ty.is_boolean_primitive()
    }

    pub fn is_private(&self) -> bool {
        self.modifiers.iter().any(|m| m == "private")
    }
}

///
/// ClassDescriptor
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub qualified_name: String,
    pub simple_name: String,
    /// Declaring package; derived from the qualified name when absent.
    pub package: Option<String>,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    /// Every declared field in declaration order, static ones included.
    pub fields: Vec<FieldDescriptor>,
    pub markers: ClassMarkers,
}

impl ClassDescriptor {
    /// A top-level class; the package is taken from the qualified name.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            qualified_name,
            simple_name,
            package: None,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            markers: ClassMarkers::default(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers = self.markers.with(marker);
        self
    }

    pub fn with_markers(mut self, markers: ClassMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Fields that take part in generation, in declaration order.
    pub fn instance_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.is_static)
    }

    /// Position of an instance field among [`Self::instance_fields`].
    pub fn instance_field_index(&self, name: &str) -> Option<usize> {
        self.instance_fields().position(|f| f.name == name)
    }

    /// The declaring namespace, empty for the default package.
    pub fn namespace(&self) -> &str {
        if let Some(package) = &self.package {
            return package;
        }

        self.qualified_name
            .strip_suffix(&self.simple_name)
            .and_then(|prefix| prefix.strip_suffix('.'))
            .unwrap_or_default()
    }

    /// Name of the class relative to its package (`Outer.Inner` for nested classes).
    pub fn local_name(&self) -> &str {
        let namespace = self.namespace();
        if namespace.is_empty() {
            return &self.qualified_name;
        }

        self.qualified_name
            .strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&self.simple_name)
    }

    /// Whether the class is declared inside another class.
    pub fn is_nested(&self) -> bool {
        self.local_name().contains('.')
    }

    /// Whether anything marks this class or one of its fields.
    pub fn has_any_marker(&self) -> bool {
        self.markers.has_any()
            || self
                .instance_fields()
                .any(|f| f.has_read_marker || f.has_write_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_detection_is_primitive_only() {
        assert!(TypeRef::from("boolean").is_boolean_primitive());
        assert!(!TypeRef::from("java.lang.Boolean").is_boolean_primitive());
        assert!(!TypeRef::from("Boolean").is_boolean_primitive());
        assert!(!TypeRef::from("int").is_boolean_primitive());
    }

    #[test]
    fn test_namespace_derived_from_qualified_name() {
        let class = ClassDescriptor::new("com.example.Point");
        assert_eq!(class.simple_name, "Point");
        assert_eq!(class.namespace(), "com.example");
        assert_eq!(class.local_name(), "Point");
    }

    #[test]
    fn test_default_package() {
        let class = ClassDescriptor::new("Point");
        assert_eq!(class.simple_name, "Point");
        assert_eq!(class.namespace(), "");
        assert_eq!(class.local_name(), "Point");
    }

    #[test]
    fn test_nested_class_local_name() {
        let class = ClassDescriptor::new("com.example.Outer.Inner").with_package("com.example");
        assert_eq!(class.simple_name, "Inner");
        assert_eq!(class.namespace(), "com.example");
        assert_eq!(class.local_name(), "Outer.Inner");
        assert!(class.is_nested());
        assert!(!ClassDescriptor::new("com.example.Outer").is_nested());
    }

    #[test]
    fn test_private_detection() {
        assert!(FieldDescriptor::new("x", "int").is_private());
        assert!(!FieldDescriptor::new("x", "int").with_modifiers(["protected"]).is_private());
        assert!(!FieldDescriptor::new("x", "int").with_modifiers(Vec::<String>::new()).is_private());
    }

    #[test]
    fn test_instance_fields_skip_statics_and_keep_order() {
        let class = ClassDescriptor::new("a.Counter")
            .with_field(FieldDescriptor::new("count", "int"))
            .with_field(
                FieldDescriptor::new("INSTANCES", "int")
                    .with_modifiers(["private", "static", "final"]),
            )
            .with_field(FieldDescriptor::new("label", "String"));

        let names: Vec<_> = class.instance_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["count", "label"]);
        assert_eq!(class.instance_field_index("label"), Some(1));
        assert_eq!(class.instance_field_index("INSTANCES"), None);
    }

    #[test]
    fn test_has_any_marker_sees_field_markers() {
        let bare = ClassDescriptor::new("a.B").with_field(FieldDescriptor::new("x", "int"));
        assert!(!bare.has_any_marker());

        let marked = ClassDescriptor::new("a.B")
            .with_field(FieldDescriptor::new("x", "int").with_marker(Marker::Setter));
        assert!(marked.has_any_marker());
    }
}
