pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{JsonFileSink, MemorySink};
pub use config::CliConfig;
pub use core::calculator::{entry_cost, format_cost, total_cost};
pub use core::comparison::{compare, ALCOHOL_PRICE_RATIO};
pub use core::workflow::FuelWorkflow;
pub use domain::model::{
    ComparisonOutcome, FieldAccess, FuelEntry, FuelType, RawSubmission, WorkflowState,
};
pub use domain::ports::DataSink;
pub use utils::error::{FuelError, Result};
