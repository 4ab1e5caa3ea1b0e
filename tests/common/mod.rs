#![allow(dead_code)]

use minilombok::prelude::*;

pub fn no_javadoc() -> GeneratorConfig {
    GeneratorConfig::builder().emit_javadoc(false).build()
}

pub fn point() -> ClassDescriptor {
    ClassDescriptor::new("com.example.Point")
        .with_markers(ClassMarkers::all())
        .with_field(FieldDescriptor::new("x", "int"))
        .with_field(FieldDescriptor::new("y", "int"))
}

pub fn test_model() -> ClassDescriptor {
    ClassDescriptor::new("io.github.minilombok.test.TestModel")
        .with_markers(ClassMarkers::all())
        .with_field(FieldDescriptor::new("name", "String"))
        .with_field(FieldDescriptor::new("age", "int"))
        .with_field(FieldDescriptor::new("active", "boolean"))
}

/// Drop `private` from every field so companion helpers can reach them.
pub fn package_access(mut class: ClassDescriptor) -> ClassDescriptor {
    for field in &mut class.fields {
        field.modifiers.retain(|m| m != "private");
    }
    class
}

/// Generate a single class and return its source text.
pub fn generate(config: GeneratorConfig, class: &ClassDescriptor) -> String {
    Generator::new(config)
        .generate_class(class)
        .unwrap()
        .expect("class should produce a unit")
        .source
}
