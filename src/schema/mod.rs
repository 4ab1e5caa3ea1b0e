//! TOML descriptor front end
//!
//! Hosts without a compiler front end describe their classes in TOML. A
//! schema file carries an optional `[generator]` table and any number of
//! `[[class]]` tables, each with nested `[[class.field]]` entries.
//!
//! ```toml
//! [[class]]
//! name = "com.example.Point"
//! markers = ["AllArgsConstructor", "Getter", "ToString"]
//!
//! [[class.field]]
//! name = "x"
//! type = "int"
//! ```

pub mod toml_parser;
pub mod toml_types;
pub mod validator;

pub use toml_parser::*;
pub use toml_types::*;
pub use validator::*;
