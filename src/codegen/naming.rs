//! Utilities for generating consistent names for accessors and output units

use crate::{
    config::NamingStrategy,
    model::{ClassDescriptor, FieldDescriptor},
};

pub const READ_PREFIX: &str = "get";
pub const BOOLEAN_READ_PREFIX: &str = "is";
pub const WRITE_PREFIX: &str = "set";
pub const STRINGIFY_METHOD: &str = "toString";

/// Upper-case the first character only (e.g. `firstName` -> `FirstName`)
///
/// A first character without a single-character upper case (`ß`) is kept.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(first).chain(chars).collect()
}

/// Read accessor name (e.g. `active: boolean` -> `isActive`, `age: int` -> `getAge`)
pub fn read_accessor_name(field: &FieldDescriptor) -> String {
    let prefix = if field.is_boolean_primitive() {
        BOOLEAN_READ_PREFIX
    } else {
        READ_PREFIX
    };
    format!("{}{}", prefix, capitalize(&field.name))
}

/// Write accessor name (e.g. `age` -> `setAge`)
pub fn write_accessor_name(field: &FieldDescriptor) -> String {
    format!("{}{}", WRITE_PREFIX, capitalize(&field.name))
}

///
/// UnitName
/// where the output channel persists a class's generated members
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitName {
    pub package: String,
    pub simple_name: String,
}

impl UnitName {
    /// Derive the unit name for a class under the given strategy.
    ///
    /// Augmenting keeps `package.SimpleName`; companions flatten nested
    /// classes (`Outer.Inner` -> `Outer_InnerLombok`).
    pub fn for_class(class: &ClassDescriptor, strategy: &NamingStrategy) -> Self {
        let simple_name = match strategy {
            NamingStrategy::Augment => class.simple_name.clone(),
            NamingStrategy::Companion { suffix } => {
                format!("{}{}", class.local_name().replace('.', "_"), suffix)
            }
        };

        Self {
            package: class.namespace().to_string(),
            simple_name,
        }
    }

    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    /// Relative file path of the unit (e.g. `com/example/Point.java`)
    pub fn file_path(&self) -> std::path::PathBuf {
        let mut path: std::path::PathBuf = self
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(format!("{}.java", self.simple_name));
        path
    }
}

impl std::fmt::Display for UnitName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified())
    }
}
