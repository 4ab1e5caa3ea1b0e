//! Prelude module for convenient imports.
//!
//! ```rust
//! use minilombok::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - [`ClassDescriptor`], [`FieldDescriptor`], [`Marker`]: the descriptor model
//! - [`Generator`], [`GeneratorConfig`], [`NamingStrategy`]: the pipeline and its knobs
//! - [`OutputSink`], [`DirectorySink`], [`MemorySink`]: where units go
//! - [`LombokError`], [`LombokResult`]: error handling

pub use crate::codegen::{Generator, OutputUnit, UnitName};
pub use crate::config::{GeneratorConfig, NamingStrategy};
pub use crate::error::{LombokError, LombokResult};
pub use crate::model::{ClassDescriptor, ClassMarkers, FieldDescriptor, Marker, TypeRef};
pub use crate::sink::{DirectorySink, MemorySink, OutputSink};
