use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Alcohol,
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelType::Gasoline => write!(f, "gasoline"),
            FuelType::Alcohol => write!(f, "alcohol"),
        }
    }
}

/// One validated form entry. Immutable once built by the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelEntry {
    pub distance: f64,
    pub consumption: f64,
    #[serde(rename = "fuelType")]
    pub fuel_type: FuelType,
    #[serde(rename = "fuelPrice")]
    pub fuel_price: f64,
}

/// Raw form payload as submitted. `None` means the field was left empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSubmission {
    pub fuel_type: FuelType,
    pub distance: Option<f64>,
    pub consumption: Option<f64>,
    pub fuel_price: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Empty,
    AwaitingAlcohol,
    Complete,
}

impl WorkflowState {
    /// Fuel type the next submission must carry, if submissions are accepted.
    pub fn expected_fuel(&self) -> Option<FuelType> {
        match self {
            WorkflowState::Empty => Some(FuelType::Gasoline),
            WorkflowState::AwaitingAlcohol => Some(FuelType::Alcohol),
            WorkflowState::Complete => None,
        }
    }

    /// Field enablement is derived from the state alone; there is no
    /// separate set of disabled flags to fall out of sync.
    pub fn field_access(&self) -> FieldAccess {
        match self {
            WorkflowState::Empty => FieldAccess {
                distance: true,
                consumption: true,
                fuel_price: true,
            },
            WorkflowState::AwaitingAlcohol => FieldAccess {
                distance: false,
                consumption: true,
                fuel_price: true,
            },
            WorkflowState::Complete => FieldAccess {
                distance: false,
                consumption: false,
                fuel_price: false,
            },
        }
    }
}

/// Which form fields are editable in a given state. The fuel-type selector
/// is never editable; the workflow fixes it per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAccess {
    pub distance: bool,
    pub consumption: bool,
    pub fuel_price: bool,
}

/// Result of the price-ratio decision rule over a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonOutcome {
    pub preferred: FuelType,
    pub preferred_cost: f64,
    pub other_cost: f64,
}
