//! # MiniLombok
//!
//! Generates Java accessor, factory and `toString` source text from class
//! descriptors.
//!
//! A descriptor names a class, its fields in declaration order and the
//! markers placed on it. Each marked class becomes one output unit:
//!
//! - `AllArgsConstructor` adds a static factory taking every instance field
//! - `Getter` adds a read accessor per field (`isX` for primitive `boolean`)
//! - `Setter` adds a write accessor per field
//! - `ToString` adds `Name{a=.., b=..}` rendering
//!
//! `Getter` and `Setter` may also mark single fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use minilombok::prelude::*;
//!
//! let point = ClassDescriptor::new("com.example.Point")
//!     .with_marker(Marker::Getter)
//!     .with_marker(Marker::ToString)
//!     .with_field(FieldDescriptor::new("x", "int"))
//!     .with_field(FieldDescriptor::new("y", "int"));
//!
//! let mut sink = MemorySink::default();
//! Generator::default().emit_round(&[point], &mut sink)?;
//!
//! let (name, source) = &sink.units()[0];
//! assert_eq!(name, "com.example.Point");
//! assert!(source.contains("public int getX()"));
//! assert!(source.contains("public String toString()"));
//! # Ok::<(), minilombok::LombokError>(())
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod schema;
pub mod sink;

pub use codegen::Generator;
pub use config::{GeneratorConfig, NamingStrategy};
pub use error::{LombokError, LombokResult};
