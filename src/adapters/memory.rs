use crate::domain::model::FuelEntry;
use crate::domain::ports::DataSink;
use crate::utils::error::Result;

/// In-memory stand-in for persistence. Holds whatever list was last saved.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Vec<FuelEntry>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataSink for MemorySink {
    fn save(&mut self, entries: &[FuelEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }

    fn load(&self) -> Result<Vec<FuelEntry>> {
        Ok(self.entries.clone())
    }
}
