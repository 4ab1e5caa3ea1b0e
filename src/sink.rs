//! Output channels for assembled units.
//!
//! The generation core never performs I/O; a sink receives each finished
//! [`OutputUnit`] and persists it however the host needs.

use crate::{codegen::OutputUnit, error::LombokResult};
use log::debug;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Destination for generated units.
pub trait OutputSink {
    fn write_unit(&mut self, unit: &OutputUnit) -> LombokResult<()>;
}

/// Writes `<root>/<package dirs>/<Unit>.java`, creating directories as needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl OutputSink for DirectorySink {
    fn write_unit(&mut self, unit: &OutputUnit) -> LombokResult<()> {
        let path = self.root.join(unit.name.file_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, unit.source.as_bytes())?;
        debug!("DirectorySink: wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Collects `(qualified unit name, source)` pairs in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    units: Vec<(String, String)>,
}

impl MemorySink {
    pub fn units(&self) -> &[(String, String)] {
        &self.units
    }

    pub fn into_units(self) -> Vec<(String, String)> {
        self.units
    }
}

impl OutputSink for MemorySink {
    fn write_unit(&mut self, unit: &OutputUnit) -> LombokResult<()> {
        self.units.push((unit.qualified_name(), unit.source.clone()));
        Ok(())
    }
}
