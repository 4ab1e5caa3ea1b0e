//! `minilombok`: generate Java accessor units from TOML class descriptors.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use minilombok::{
    Generator, GeneratorConfig, NamingStrategy,
    codegen::OutputUnit,
    config::DEFAULT_COMPANION_SUFFIX,
    schema::{SchemaFile, build_descriptors, load_schemas},
    sink::DirectorySink,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Augment,
    Companion,
}

#[derive(Debug, Parser)]
#[command(name = "minilombok", version, about)]
struct Args {
    /// Schema files describing the classes of one round
    #[arg(required = true)]
    schemas: Vec<PathBuf>,

    /// Root directory for generated sources
    #[arg(long, short, default_value = "generated")]
    out: PathBuf,

    /// Output convention, overriding the schema's `[generator]` table
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Companion unit suffix (implies `--strategy companion`)
    #[arg(long)]
    suffix: Option<String>,

    /// Omit javadoc blocks
    #[arg(long)]
    no_javadoc: bool,

    /// Annotate generated types with `@Generated`
    #[arg(long)]
    generated_annotation: bool,

    /// Validate and generate without writing anything
    #[arg(long)]
    check: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    /// Base configuration from the schema files, then command-line overrides.
    fn config(&self, schemas: &[SchemaFile]) -> Result<GeneratorConfig> {
        let mut tables = schemas.iter().filter_map(|s| s.generator.as_ref());
        let mut config = tables.next().cloned().unwrap_or_default();
        if tables.any(|other| *other != config) {
            bail!("schema files carry conflicting [generator] tables");
        }

        let companion = match self.strategy {
            Some(StrategyArg::Augment) if self.suffix.is_some() => {
                bail!("--suffix only applies to the companion strategy")
            }
            Some(StrategyArg::Augment) => {
                config.strategy = NamingStrategy::Augment;
                false
            }
            Some(StrategyArg::Companion) => true,
            None => self.suffix.is_some(),
        };
        if companion {
            let suffix = match (&self.suffix, &config.strategy) {
                (Some(suffix), _) | (None, NamingStrategy::Companion { suffix }) => suffix.clone(),
                (None, NamingStrategy::Augment) => DEFAULT_COMPANION_SUFFIX.to_string(),
            };
            config.strategy = NamingStrategy::companion(suffix);
        }
        if self.no_javadoc {
            config.emit_javadoc = false;
        }
        if self.generated_annotation {
            config.add_generated_annotation = true;
        }

        Ok(config)
    }
}

/// Qualified names reported by `--check`.
fn unit_names(units: &[OutputUnit]) -> Vec<String> {
    units.iter().map(OutputUnit::qualified_name).collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let schemas = load_schemas(&args.schemas)?;
    let config = args.config(&schemas)?;
    let classes = build_descriptors(&schemas)?;
    let generator = Generator::new(config);

    if args.check {
        let units = generator.generate_round(&classes)?;
        for name in unit_names(&units) {
            println!("{name}");
        }
        info!("Check passed: {} unit(s) would be written", units.len());
        return Ok(());
    }

    let mut sink = DirectorySink::new(&args.out);
    generator
        .emit_round(&classes, &mut sink)
        .with_context(|| format!("generation into {} failed", args.out.display()))?;
    for path in sink.written() {
        println!("{}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minilombok::schema::parse_schema_from_str;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["minilombok"];
        argv.extend_from_slice(extra);
        argv.push("schema.toml");
        Args::parse_from(argv)
    }

    #[test]
    fn test_cli_defaults() {
        let args = args(&[]);
        assert_eq!(args.out, PathBuf::from("generated"));
        assert_eq!(args.config(&[]).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_suffix_implies_companion() {
        let config = args(&["--suffix", "Helpers"]).config(&[]).unwrap();
        assert_eq!(config.strategy, NamingStrategy::companion("Helpers"));
    }

    #[test]
    fn test_flags_override_schema_table() {
        let schema = parse_schema_from_str(
            r#"
            [generator]
            strategy = { companion = { suffix = "Ops" } }
            factory_name = "of"
            "#,
        )
        .unwrap();

        let config = args(&["--strategy", "augment", "--no-javadoc"])
            .config(&[schema.clone()])
            .unwrap();
        assert_eq!(config.strategy, NamingStrategy::Augment);
        assert_eq!(config.factory_name, "of");
        assert!(!config.emit_javadoc);

        let config = args(&["--strategy", "companion"]).config(&[schema]).unwrap();
        assert_eq!(config.strategy, NamingStrategy::companion("Ops"));
    }

    #[test]
    fn test_conflicting_tables_are_rejected() {
        let first = parse_schema_from_str("[generator]\nfactory_name = \"of\"").unwrap();
        let second = parse_schema_from_str("[generator]\nfactory_name = \"make\"").unwrap();
        assert!(args(&[]).config(&[first, second]).is_err());
    }

    #[test]
    fn test_check_reports_qualified_unit_names() {
        let schema = parse_schema_from_str(
            r#"
            [[class]]
            name = "com.example.Point"
            markers = ["Getter"]

            [[class.field]]
            name = "x"
            type = "int"
            "#,
        )
        .unwrap();
        let classes = build_descriptors(&[schema]).unwrap();
        let units = Generator::default().generate_round(&classes).unwrap();
        assert_eq!(unit_names(&units), vec!["com.example.Point"]);
    }

    #[test]
    fn test_augment_with_suffix_is_rejected() {
        assert!(args(&["--strategy", "augment", "--suffix", "X"]).config(&[]).is_err());
    }
}
