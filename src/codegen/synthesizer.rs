//! Member synthesis: the canonical text of one generated member.
//!
//! The same rules serve both naming strategies. Augmenting emits instance
//! members that read through `this`; companion units emit `static` helpers
//! that take the target object as their first parameter.

use crate::{
    codegen::{
        naming::{STRINGIFY_METHOD, read_accessor_name, write_accessor_name},
        resolver::{GenerationRequest, MemberKind},
    },
    config::{GeneratorConfig, NamingStrategy},
    error::{LombokError, LombokResult},
    model::{ClassDescriptor, FieldDescriptor},
};

/// Preferred name for the object a factory builds or a companion helper receives.
const INSTANCE_NAME: &str = "instance";

/// Field types whose `String.valueOf` overload is not null-safe.
const NON_NULL_SAFE_VALUE_OF: &[&str] = &["char[]"];

/// Text of one synthesized member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMember {
    pub kind: MemberKind,
    /// Method name as emitted (`create`, `getX`, `toString`, ...).
    pub name: String,
    /// Declaration index of the targeted field; zero for whole-class members.
    pub ordinal: usize,
    /// Member text indented one level, without a trailing newline.
    pub text: String,
}

impl GeneratedMember {
    /// Emission order key: kind first, then field declaration order.
    pub fn sort_key(&self) -> (MemberKind, usize) {
        (self.kind, self.ordinal)
    }
}

/// Line buffer that indents relative to the class body.
struct CodeWriter<'c> {
    indent: &'c str,
    lines: Vec<String>,
}

impl<'c> CodeWriter<'c> {
    fn new(indent: &'c str) -> Self {
        Self {
            indent,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", self.indent.repeat(depth), text));
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

///
/// Synthesizer
///
pub struct Synthesizer<'c> {
    config: &'c GeneratorConfig,
}

impl<'c> Synthesizer<'c> {
    pub const fn new(config: &'c GeneratorConfig) -> Self {
        Self { config }
    }

    /// Produce the member text for a resolved request.
    ///
    /// Fails when the request names a field that is not an instance field
    /// of `class`, which the resolver never produces, or when a companion
    /// helper would have to reach a private field.
    pub fn synthesize(
        &self,
        request: &GenerationRequest<'_>,
        class: &ClassDescriptor,
    ) -> LombokResult<GeneratedMember> {
        let member = match request {
            GenerationRequest::Constructor(fields) => {
                self.check_fields(class, fields)?;
                self.constructor(class, fields)
            }
            GenerationRequest::Read(field) => {
                let ordinal = self.check_field(class, field)?;
                self.read_accessor(class, field, ordinal)
            }
            GenerationRequest::Write(field) => {
                let ordinal = self.check_field(class, field)?;
                self.write_accessor(class, field, ordinal)
            }
            GenerationRequest::Stringify(fields) => {
                self.check_fields(class, fields)?;
                self.stringify(class, fields)
            }
        };

        Ok(member)
    }

    /// Declaration index of `field`; companions also need it non-private.
    fn check_field(&self, class: &ClassDescriptor, field: &FieldDescriptor) -> LombokResult<usize> {
        let ordinal = field_ordinal(class, field)?;
        if self.is_companion() && field.is_private() {
            return Err(LombokError::InaccessibleField {
                class: class.qualified_name.clone(),
                field: field.name.clone(),
            });
        }
        Ok(ordinal)
    }

    fn check_fields(&self, class: &ClassDescriptor, fields: &[&FieldDescriptor]) -> LombokResult<()> {
        for field in fields {
            self.check_field(class, field)?;
        }
        Ok(())
    }

    fn is_companion(&self) -> bool {
        matches!(self.config.strategy, NamingStrategy::Companion { .. })
    }

    /// How generated code names the class type.
    fn type_name<'a>(&self, class: &'a ClassDescriptor) -> &'a str {
        if self.is_companion() {
            class.local_name()
        } else {
            class.simple_name.as_str()
        }
    }

    /// Expression that reaches the object whose fields are accessed.
    fn receiver(&self, class: &ClassDescriptor) -> String {
        if self.is_companion() {
            instance_name(class)
        } else {
            "this".to_string()
        }
    }

    /// Leading parameter of companion helpers (`Point instance, `).
    fn receiver_param(&self, class: &ClassDescriptor) -> String {
        if self.is_companion() {
            format!("{} {}, ", self.type_name(class), instance_name(class))
        } else {
            String::new()
        }
    }

    fn modifiers(&self) -> &'static str {
        if self.is_companion() {
            "public static"
        } else {
            "public"
        }
    }

    fn javadoc(&self, out: &mut CodeWriter<'_>, summary: &str) {
        if !self.config.emit_javadoc {
            return;
        }
        out.line(1, "/**");
        out.line(1, format!(" * {summary}"));
        out.line(1, " */");
    }

    fn constructor(&self, class: &ClassDescriptor, fields: &[&FieldDescriptor]) -> GeneratedMember {
        let type_name = self.type_name(class);
        let factory = &self.config.factory_name;
        let local = instance_name(class);
        let mut out = CodeWriter::new(&self.config.indent);

        self.javadoc(
            &mut out,
            &format!(
                "Creates a new instance of {} with all fields initialized.",
                class.simple_name
            ),
        );

        if fields.is_empty() {
            out.line(1, format!("public static {type_name} {factory}() {{"));
        } else {
            out.line(1, format!("public static {type_name} {factory}("));
            for (i, field) in fields.iter().enumerate() {
                let end = if i + 1 == fields.len() { ") {" } else { "," };
                out.line(3, format!("{} {}{}", field.ty, field.name, end));
            }
        }

        out.line(2, format!("{type_name} {local} = new {type_name}();"));
        for field in fields {
            out.line(2, format!("{local}.{0} = {0};", field.name));
        }
        out.line(2, format!("return {local};"));
        out.line(1, "}");

        GeneratedMember {
            kind: MemberKind::Constructor,
            name: factory.clone(),
            ordinal: 0,
            text: out.finish(),
        }
    }

    fn read_accessor(
        &self,
        class: &ClassDescriptor,
        field: &FieldDescriptor,
        ordinal: usize,
    ) -> GeneratedMember {
        let name = read_accessor_name(field);
        let mut out = CodeWriter::new(&self.config.indent);

        self.javadoc(&mut out, &format!("Gets the value of {}.", field.name));
        out.line(
            1,
            format!(
                "{} {} {}({}) {{",
                self.modifiers(),
                field.ty,
                name,
                self.receiver_param(class).trim_end_matches(", ")
            ),
        );
        out.line(2, format!("return {}.{};", self.receiver(class), field.name));
        out.line(1, "}");

        GeneratedMember {
            kind: MemberKind::Read,
            name,
            ordinal,
            text: out.finish(),
        }
    }

    fn write_accessor(
        &self,
        class: &ClassDescriptor,
        field: &FieldDescriptor,
        ordinal: usize,
    ) -> GeneratedMember {
        let name = write_accessor_name(field);
        let mut out = CodeWriter::new(&self.config.indent);

        self.javadoc(&mut out, &format!("Sets the value of {}.", field.name));
        out.line(
            1,
            format!(
                "{} void {}({}{} {}) {{",
                self.modifiers(),
                name,
                self.receiver_param(class),
                field.ty,
                field.name
            ),
        );
        out.line(
            2,
            format!("{}.{1} = {1};", self.receiver(class), field.name),
        );
        out.line(1, "}");

        GeneratedMember {
            kind: MemberKind::Write,
            name,
            ordinal,
            text: out.finish(),
        }
    }

    fn stringify(&self, class: &ClassDescriptor, fields: &[&FieldDescriptor]) -> GeneratedMember {
        let receiver = self.receiver(class);
        let mut out = CodeWriter::new(&self.config.indent);

        self.javadoc(
            &mut out,
            &format!(
                "Returns a string representation of this {} instance.",
                class.simple_name
            ),
        );
        if !self.is_companion() {
            out.line(1, "@Override");
        }
        out.line(
            1,
            format!(
                "{} String {}({}) {{",
                self.modifiers(),
                STRINGIFY_METHOD,
                self.receiver_param(class).trim_end_matches(", ")
            ),
        );
        out.line(
            2,
            format!("StringBuilder sb = new StringBuilder(\"{}{{\");", class.simple_name),
        );
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.line(2, "sb.append(\", \");");
            }
            out.line(
                2,
                format!(
                    "sb.append(\"{}=\").append({});",
                    field.name,
                    value_of(&receiver, field)
                ),
            );
        }
        out.line(2, "sb.append(\"}\");");
        out.line(2, "return sb.toString();");
        out.line(1, "}");

        GeneratedMember {
            kind: MemberKind::Stringify,
            name: STRINGIFY_METHOD.to_string(),
            ordinal: 0,
            text: out.finish(),
        }
    }
}

/// Null-safe string conversion of a field value.
fn value_of(receiver: &str, field: &FieldDescriptor) -> String {
    if NON_NULL_SAFE_VALUE_OF.contains(&field.ty.as_str().trim()) {
        format!("String.valueOf((Object) {}.{})", receiver, field.name)
    } else {
        format!("String.valueOf({}.{})", receiver, field.name)
    }
}

/// `instance`, prefixed with underscores until no instance field shadows it.
fn instance_name(class: &ClassDescriptor) -> String {
    let mut name = INSTANCE_NAME.to_string();
    while class.instance_fields().any(|f| f.name == name) {
        name.insert(0, '_');
    }
    name
}

fn field_ordinal(class: &ClassDescriptor, field: &FieldDescriptor) -> LombokResult<usize> {
    class
        .instance_field_index(&field.name)
        .ok_or_else(|| LombokError::UnknownField {
            class: class.qualified_name.clone(),
            field: field.name.clone(),
        })
}
