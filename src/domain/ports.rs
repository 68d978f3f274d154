use crate::domain::model::FuelEntry;
use crate::utils::error::Result;

/// Persistence collaborator for the comparison round. The workflow owns the
/// authoritative entry list; the sink only receives full copies of it. Every
/// `save` replaces whatever the sink held before.
pub trait DataSink {
    fn save(&mut self, entries: &[FuelEntry]) -> Result<()>;
    fn load(&self) -> Result<Vec<FuelEntry>>;
}
