//! Emission assembly: one ordered, fully rendered output unit per class.

use crate::{
    codegen::{naming::UnitName, synthesizer::GeneratedMember},
    config::{GeneratorConfig, NamingStrategy},
    error::{LombokError, LombokResult},
    model::{ClassDescriptor, FieldDescriptor},
};
use log::debug;

/// Annotation added to generated types when enabled.
pub const GENERATED_ANNOTATION: &str = "@javax.annotation.processing.Generated(\"minilombok\")";

/// The complete generated source of one class, ready for an output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    pub name: UnitName,
    /// Members in emission order.
    pub members: Vec<GeneratedMember>,
    pub source: String,
}

impl OutputUnit {
    pub fn namespace(&self) -> &str {
        &self.name.package
    }

    pub fn qualified_name(&self) -> String {
        self.name.qualified()
    }
}

///
/// Assembler
///
pub struct Assembler<'c> {
    config: &'c GeneratorConfig,
}

impl<'c> Assembler<'c> {
    pub const fn new(config: &'c GeneratorConfig) -> Self {
        Self { config }
    }

    /// Order the members and render the unit.
    ///
    /// Returns `None` when there is nothing to emit; a class without members
    /// never produces an empty shell. Nested classes are refused when
    /// augmenting, since the unit would declare a different top-level type.
    pub fn assemble(
        &self,
        class: &ClassDescriptor,
        mut members: Vec<GeneratedMember>,
    ) -> LombokResult<Option<OutputUnit>> {
        if members.is_empty() {
            debug!("Assembler: {} has no members, skipping", class.qualified_name);
            return Ok(None);
        }

        if class.is_nested() && !self.config.strategy.is_companion() {
            return Err(LombokError::NestedClass(class.qualified_name.clone()));
        }

        members.sort_by_key(GeneratedMember::sort_key);
        if let Some(pair) = members
            .windows(2)
            .find(|pair| pair[0].sort_key() == pair[1].sort_key())
        {
            return Err(LombokError::DuplicateMember {
                class: class.qualified_name.clone(),
                member: pair[1].name.clone(),
            });
        }

        let name = UnitName::for_class(class, &self.config.strategy);
        let source = self.render(class, &name, &members);
        debug!(
            "Assembler: {} -> {} ({} member(s), {} bytes)",
            class.qualified_name,
            name,
            members.len(),
            source.len()
        );

        Ok(Some(OutputUnit {
            name,
            members,
            source,
        }))
    }

    fn render(&self, class: &ClassDescriptor, name: &UnitName, members: &[GeneratedMember]) -> String {
        let mut out = String::new();

        if !name.package.is_empty() {
            out.push_str(&format!("package {};\n\n", name.package));
        }
        if !self.config.header_comment.is_empty() {
            out.push_str(&format!("// {}\n", self.config.header_comment));
        }
        if self.config.add_generated_annotation {
            out.push_str(GENERATED_ANNOTATION);
            out.push('\n');
        }

        let mut sections = Vec::new();
        match &self.config.strategy {
            NamingStrategy::Augment => {
                out.push_str(&class_header(class));
                let fields: Vec<String> = class
                    .fields
                    .iter()
                    .map(|field| self.field_declaration(field))
                    .collect();
                if !fields.is_empty() {
                    sections.push(fields.join("\n"));
                }
            }
            NamingStrategy::Companion { .. } => {
                out.push_str(&format!("public final class {} {{\n", name.simple_name));
                sections.push(format!(
                    "{0}private {1}() {{\n{0}}}",
                    self.config.indent, name.simple_name
                ));
            }
        }
        sections.extend(members.iter().map(|member| member.text.clone()));

        out.push_str(&sections.join("\n\n"));
        out.push_str("\n}\n");
        out
    }

    fn field_declaration(&self, field: &FieldDescriptor) -> String {
        let mut line = self.config.indent.clone();
        for modifier in &field.modifiers {
            line.push_str(modifier);
            line.push(' ');
        }
        line.push_str(&format!("{} {}", field.ty, field.name));
        if let Some(initializer) = &field.initializer {
            line.push_str(&format!(" = {initializer}"));
        }
        line.push(';');
        line
    }
}

fn class_header(class: &ClassDescriptor) -> String {
    let mut header = format!("public class {}", class.simple_name);
    if let Some(superclass) = &class.superclass {
        header.push_str(&format!(" extends {superclass}"));
    }
    if !class.interfaces.is_empty() {
        let interfaces: Vec<String> = class.interfaces.iter().map(ToString::to_string).collect();
        header.push_str(&format!(" implements {}", interfaces.join(", ")));
    }
    header.push_str(" {\n");
    header
}
