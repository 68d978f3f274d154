pub mod calculator;
pub mod comparison;
pub mod workflow;

pub use crate::domain::model::{
    ComparisonOutcome, FieldAccess, FuelEntry, FuelType, RawSubmission, WorkflowState,
};
pub use crate::domain::ports::DataSink;
pub use crate::utils::error::Result;
