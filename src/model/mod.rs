//! Read-only descriptor model of the classes under generation.
//!
//! Descriptors are built once per round by a front end (the TOML schema
//! loader in [`crate::schema`], or any host that can describe its classes)
//! and are never mutated by the generation pipeline.

pub mod descriptor;
pub mod marker;

pub use descriptor::*;
pub use marker::*;
