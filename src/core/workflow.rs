use crate::core::comparison::compare;
use crate::domain::model::{
    ComparisonOutcome, FieldAccess, FuelEntry, FuelType, RawSubmission, WorkflowState,
};
use crate::domain::ports::DataSink;
use crate::utils::error::{FuelError, Result};
use crate::utils::validation::{
    validate_entry, validate_field, validate_in_limits, CONSUMPTION_LIMITS, DISTANCE_LIMITS,
    FUEL_PRICE_LIMITS,
};

/// Two-step entry workflow: one gasoline entry, then one alcohol entry
/// sharing the first entry's distance, then a locked round with a computed
/// outcome. The workflow owns the authoritative entry list and pushes full
/// copies to the sink after every accepted transition.
pub struct FuelWorkflow<S: DataSink> {
    sink: S,
    entries: Vec<FuelEntry>,
    shared_distance: Option<f64>,
    outcome: Option<ComparisonOutcome>,
}

impl<S: DataSink> FuelWorkflow<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            entries: Vec::new(),
            shared_distance: None,
            outcome: None,
        }
    }

    /// Rebuilds a round from whatever the sink already holds. Accepts the
    /// three shapes a well-formed round can leave behind: nothing, a single
    /// gasoline entry, or a gasoline-then-alcohol pair.
    pub fn restore(sink: S) -> Result<Self> {
        let entries = sink.load()?;
        if entries.len() > 2 {
            return Err(FuelError::invariant(format!(
                "stored round holds {} entries, at most 2 expected",
                entries.len()
            )));
        }

        // Stored entries bypass the submission path, so their field values
        // get the same window checks a submission would.
        for entry in &entries {
            validate_entry(entry).map_err(|e| {
                FuelError::invariant(format!("stored {} entry is invalid: {e}", entry.fuel_type))
            })?;
        }

        let outcome = match (entries.first().copied(), entries.get(1).copied()) {
            (Some(first), None) if first.fuel_type != FuelType::Gasoline => {
                return Err(FuelError::invariant(
                    "stored round starts with an alcohol entry",
                ));
            }
            (Some(first), Some(second)) => Some(compare(&first, &second)?),
            _ => None,
        };

        Ok(Self {
            shared_distance: entries.first().map(|e| e.distance),
            sink,
            entries,
            outcome,
        })
    }

    /// Current state, derived from the entry list length. No separate
    /// `locked` flag exists to drift out of sync.
    pub fn state(&self) -> WorkflowState {
        match self.entries.len() {
            0 => WorkflowState::Empty,
            1 => WorkflowState::AwaitingAlcohol,
            _ => WorkflowState::Complete,
        }
    }

    pub fn entries(&self) -> &[FuelEntry] {
        &self.entries
    }

    /// Distance carried from the gasoline entry into the alcohol entry.
    pub fn shared_distance(&self) -> Option<f64> {
        self.shared_distance
    }

    /// Decision rule output, available once the round is complete.
    pub fn outcome(&self) -> Option<&ComparisonOutcome> {
        self.outcome.as_ref()
    }

    pub fn field_access(&self) -> FieldAccess {
        self.state().field_access()
    }

    /// Handles one form submission. Validation failures leave the round
    /// untouched; a submission the state machine forbids is an invariant
    /// violation, not a user error.
    pub fn submit(&mut self, raw: RawSubmission) -> Result<WorkflowState> {
        let state = self.state();
        let expected = state.expected_fuel().ok_or_else(|| {
            FuelError::invariant("submission received while the round is complete")
        })?;
        if raw.fuel_type != expected {
            return Err(FuelError::invariant(format!(
                "expected a {expected} entry, got {}",
                raw.fuel_type
            )));
        }

        let entry = match state {
            WorkflowState::Empty => {
                let distance = validate_field(DISTANCE_LIMITS, raw.distance)?;
                let consumption = validate_field(CONSUMPTION_LIMITS, raw.consumption)?;
                let fuel_price = validate_field(FUEL_PRICE_LIMITS, raw.fuel_price)?;
                FuelEntry {
                    distance,
                    consumption,
                    fuel_type: FuelType::Gasoline,
                    fuel_price,
                }
            }
            WorkflowState::AwaitingAlcohol => {
                // The distance field is locked; the carried value wins over
                // anything in the payload.
                let carried = self
                    .shared_distance
                    .ok_or_else(|| FuelError::invariant("awaiting alcohol without a carried distance"))?;
                let distance = validate_in_limits(DISTANCE_LIMITS, carried)?;
                let consumption = validate_field(CONSUMPTION_LIMITS, raw.consumption)?;
                let fuel_price = validate_field(FUEL_PRICE_LIMITS, raw.fuel_price)?;
                FuelEntry {
                    distance,
                    consumption,
                    fuel_type: FuelType::Alcohol,
                    fuel_price,
                }
            }
            WorkflowState::Complete => unreachable!("expected_fuel returned None"),
        };

        // All fallible work happens against a candidate list; the round only
        // advances once the sink has accepted it, so a failed save leaves
        // this submission without a trace.
        let mut candidate = self.entries.clone();
        candidate.push(entry);
        let outcome = match candidate.as_slice() {
            [first, second] => Some(compare(first, second)?),
            _ => None,
        };
        self.sink.save(&candidate)?;

        if entry.fuel_type == FuelType::Gasoline {
            self.shared_distance = Some(entry.distance);
        }
        self.entries = candidate;
        tracing::debug!(
            fuel = %entry.fuel_type,
            distance = entry.distance,
            "entry recorded"
        );
        if let Some(outcome) = outcome {
            tracing::info!(preferred = %outcome.preferred, "round complete");
            self.outcome = Some(outcome);
        }

        Ok(self.state())
    }

    /// Clears the round and the sink; valid from any state.
    pub fn reset(&mut self) -> Result<()> {
        self.entries.clear();
        self.shared_distance = None;
        self.outcome = None;
        self.sink.save(&[])?;
        tracing::debug!("round reset");
        Ok(())
    }
}
