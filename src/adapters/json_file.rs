use crate::domain::model::FuelEntry;
use crate::domain::ports::DataSink;
use crate::utils::error::{FuelError, Result};
use crate::utils::validation::validate_entry;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed sink variant: the entry list as a pretty-printed JSON array.
/// A missing file reads as an empty list.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSink for JsonFileSink {
    fn save(&mut self, entries: &[FuelEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "entries written");
        Ok(())
    }

    fn load(&self) -> Result<Vec<FuelEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let entries: Vec<FuelEntry> = serde_json::from_str(&data)?;

        // The file is editable outside the workflow; entries that fell out
        // of the validation windows must not re-enter a round.
        for entry in &entries {
            validate_entry(entry).map_err(|e| {
                FuelError::invariant(format!(
                    "{}: stored entry is invalid: {e}",
                    self.path.display()
                ))
            })?;
        }
        Ok(entries)
    }
}
