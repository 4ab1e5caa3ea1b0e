//! Generation pipeline
//!
//! Descriptor -> [`resolver`] -> [`synthesizer`] -> [`assembler`] -> sink.
//! Each class is an independent, pure map from its descriptor to at most one
//! [`OutputUnit`]; a round collects the units of a batch of classes.

pub mod assembler;
pub mod naming;
pub mod resolver;
pub mod synthesizer;

pub use assembler::*;
pub use naming::*;
pub use resolver::*;
pub use synthesizer::*;

use crate::{
    config::GeneratorConfig,
    error::{LombokError, LombokResult},
    model::ClassDescriptor,
    sink::OutputSink,
};
use log::{debug, info};
use std::collections::BTreeSet;

///
/// Generator
///
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the pipeline for one class.
    ///
    /// `Ok(None)` means the class requested nothing.
    pub fn generate_class(&self, class: &ClassDescriptor) -> LombokResult<Option<OutputUnit>> {
        let synthesizer = Synthesizer::new(&self.config);
        let members = resolve(class)
            .iter()
            .map(|request| synthesizer.synthesize(request, class))
            .collect::<LombokResult<Vec<_>>>()?;

        Assembler::new(&self.config).assemble(class, members)
    }

    /// Run the pipeline for every class of a round.
    ///
    /// The round is all-or-nothing: the first fault aborts it and no unit is
    /// returned. Units come back in input order.
    pub fn generate_round(&self, classes: &[ClassDescriptor]) -> LombokResult<Vec<OutputUnit>> {
        let mut seen = BTreeSet::new();
        let mut units = Vec::new();

        for class in classes {
            let Some(unit) = self.generate_class(class)? else {
                continue;
            };
            if !seen.insert(unit.name.clone()) {
                return Err(LombokError::DuplicateUnit(unit.qualified_name()));
            }
            units.push(unit);
        }

        info!(
            "Generated {} unit(s) from {} class(es)",
            units.len(),
            classes.len()
        );
        Ok(units)
    }

    /// Generate a round and hand every unit to `sink`.
    ///
    /// Nothing is written unless the whole round generated cleanly.
    pub fn emit_round<S: OutputSink + ?Sized>(
        &self,
        classes: &[ClassDescriptor],
        sink: &mut S,
    ) -> LombokResult<Vec<OutputUnit>> {
        let units = self.generate_round(classes)?;
        for unit in &units {
            debug!("Writing unit {}", unit.name);
            sink.write_unit(unit)?;
        }
        Ok(units)
    }
}
