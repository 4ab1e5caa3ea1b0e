//! Generator configuration.
//!
//! Built with `typed-builder`, or read from the optional `[generator]` table
//! of a schema file.
//!
//! # Examples
//!
//! ```
//! use minilombok::config::{GeneratorConfig, NamingStrategy};
//!
//! // Defaults: augment the class in place, `create` factory, 4-space indent
//! let config = GeneratorConfig::default();
//! assert_eq!(config.strategy, NamingStrategy::Augment);
//!
//! // Companion units with static helpers
//! let config = GeneratorConfig::builder()
//!     .strategy(NamingStrategy::companion("Accessors"))
//!     .emit_javadoc(false)
//!     .build();
//! assert_eq!(config.factory_name, "create");
//! ```

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default suffix appended to companion unit names.
pub const DEFAULT_COMPANION_SUFFIX: &str = "Lombok";

/// Output convention shared by every class of a round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    /// Regenerate the class itself with the new members added.
    #[default]
    Augment,

    /// Emit a separate `<Local><suffix>` unit of static helpers.
    Companion {
        #[serde(default = "default_suffix")]
        suffix: String,
    },
}

impl NamingStrategy {
    pub fn companion(suffix: impl Into<String>) -> Self {
        Self::Companion {
            suffix: suffix.into(),
        }
    }

    pub fn is_companion(&self) -> bool {
        matches!(self, Self::Companion { .. })
    }
}

fn default_suffix() -> String {
    DEFAULT_COMPANION_SUFFIX.to_string()
}

/// Knobs that shape the emitted text.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
#[builder(doc)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Augment the class in place or emit a companion unit
    #[builder(default)]
    pub strategy: NamingStrategy,

    /// Name of the all-fields factory
    #[builder(default = "create".to_string(), setter(into))]
    pub factory_name: String,

    /// One level of indentation
    #[builder(default = "    ".to_string(), setter(into))]
    pub indent: String,

    /// Emit a javadoc block above each generated member
    #[builder(default = true)]
    pub emit_javadoc: bool,

    /// Annotate generated types with `@javax.annotation.processing.Generated`
    #[builder(default = false)]
    pub add_generated_annotation: bool,

    /// Line comment placed at the top of each unit
    #[builder(default = "Generated by MiniLombok".to_string(), setter(into))]
    pub header_comment: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.strategy, NamingStrategy::Augment);
        assert_eq!(config.factory_name, "create");
        assert_eq!(config.indent, "    ");
        assert!(config.emit_javadoc);
        assert!(!config.add_generated_annotation);
        assert_eq!(config.header_comment, "Generated by MiniLombok");
    }

    #[test]
    fn test_generator_config_builder() {
        let config = GeneratorConfig::builder()
            .strategy(NamingStrategy::companion("Helpers"))
            .factory_name("of")
            .indent("\t")
            .build();

        assert!(config.strategy.is_companion());
        assert_eq!(config.factory_name, "of");
        assert_eq!(config.indent, "\t");
    }

    #[test]
    fn test_generator_config_from_toml() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            factory_name = "of"
            add_generated_annotation = true
            strategy = { companion = {} }
            "#,
        )
        .unwrap();

        assert_eq!(
            config.strategy,
            NamingStrategy::companion(DEFAULT_COMPANION_SUFFIX)
        );
        assert_eq!(config.factory_name, "of");
        assert!(config.add_generated_annotation);
        assert!(config.emit_javadoc);
    }

    #[test]
    fn test_augment_strategy_from_toml() {
        let config: GeneratorConfig = toml::from_str(r#"strategy = "augment""#).unwrap();
        assert_eq!(config.strategy, NamingStrategy::Augment);
    }
}
