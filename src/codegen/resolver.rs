//! Capability resolution: which members a class needs.
//!
//! Class-level markers cover every instance field; field-level accessor
//! markers grant the accessor for that field alone. Each field yields at most
//! one read and one write request however many origins ask for it.

use crate::model::{ClassDescriptor, FieldDescriptor};
use log::debug;
use strum::{AsRefStr, Display, EnumIter};

/// Kind of a generated member, in emission order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, AsRefStr, EnumIter,
)]
pub enum MemberKind {
    Constructor,
    Read,
    Write,
    Stringify,
}

/// A single member the synthesizer must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest<'a> {
    /// All-fields factory over the instance fields in declaration order.
    Constructor(Vec<&'a FieldDescriptor>),
    Read(&'a FieldDescriptor),
    Write(&'a FieldDescriptor),
    /// String representation over the instance fields in declaration order.
    Stringify(Vec<&'a FieldDescriptor>),
}

impl GenerationRequest<'_> {
    pub fn kind(&self) -> MemberKind {
        match self {
            GenerationRequest::Constructor(_) => MemberKind::Constructor,
            GenerationRequest::Read(_) => MemberKind::Read,
            GenerationRequest::Write(_) => MemberKind::Write,
            GenerationRequest::Stringify(_) => MemberKind::Stringify,
        }
    }

    /// The single field an accessor request targets.
    pub fn field(&self) -> Option<&FieldDescriptor> {
        match self {
            GenerationRequest::Read(field) | GenerationRequest::Write(field) => Some(*field),
            GenerationRequest::Constructor(_) | GenerationRequest::Stringify(_) => None,
        }
    }
}

/// Compute the generation requests for a class.
///
/// Returns an empty sequence for a class without markers.
pub fn resolve(class: &ClassDescriptor) -> Vec<GenerationRequest<'_>> {
    let markers = &class.markers;
    let fields: Vec<&FieldDescriptor> = class.instance_fields().collect();
    let mut requests = Vec::new();

    if markers.all_args_constructor {
        requests.push(GenerationRequest::Constructor(fields.clone()));
    }

    requests.extend(
        fields
            .iter()
            .copied()
            .filter(|field| markers.getter || field.has_read_marker)
            .map(GenerationRequest::Read),
    );

    requests.extend(
        fields
            .iter()
            .copied()
            .filter(|field| markers.setter || field.has_write_marker)
            .map(GenerationRequest::Write),
    );

    if markers.to_string {
        requests.push(GenerationRequest::Stringify(fields));
    }

    debug!(
        "Resolver: {} -> {} request(s)",
        class.qualified_name,
        requests.len()
    );

    requests
}
