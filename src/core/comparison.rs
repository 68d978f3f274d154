use crate::core::calculator::entry_cost;
use crate::domain::model::{ComparisonOutcome, FuelEntry, FuelType};
use crate::utils::error::{FuelError, Result};

/// Alcohol is only worthwhile below this fraction of the gasoline price per
/// liter. A fixed domain heuristic, deliberately not derived from the
/// computed total costs: tied totals can still prefer gasoline.
pub const ALCOHOL_PRICE_RATIO: f64 = 0.7;

/// Decides the preferable fuel for a completed round. Pure function of the
/// two entries; the caller guarantees gasoline-then-alcohol typing.
pub fn compare(gasoline: &FuelEntry, alcohol: &FuelEntry) -> Result<ComparisonOutcome> {
    if gasoline.fuel_type != FuelType::Gasoline || alcohol.fuel_type != FuelType::Alcohol {
        return Err(FuelError::invariant(format!(
            "compare called with ({}, {}) entries",
            gasoline.fuel_type, alcohol.fuel_type
        )));
    }

    let threshold = gasoline.fuel_price * ALCOHOL_PRICE_RATIO;
    let gasoline_cost = entry_cost(gasoline);
    let alcohol_cost = entry_cost(alcohol);

    // Strict inequality: a price exactly at the threshold keeps gasoline.
    let outcome = if alcohol.fuel_price < threshold {
        ComparisonOutcome {
            preferred: FuelType::Alcohol,
            preferred_cost: alcohol_cost,
            other_cost: gasoline_cost,
        }
    } else {
        ComparisonOutcome {
            preferred: FuelType::Gasoline,
            preferred_cost: gasoline_cost,
            other_cost: alcohol_cost,
        }
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn gasoline(distance: f64, consumption: f64, price: f64) -> FuelEntry {
        FuelEntry {
            distance,
            consumption,
            fuel_type: FuelType::Gasoline,
            fuel_price: price,
        }
    }

    fn alcohol(distance: f64, consumption: f64, price: f64) -> FuelEntry {
        FuelEntry {
            distance,
            consumption,
            fuel_type: FuelType::Alcohol,
            fuel_price: price,
        }
    }

    #[test]
    fn alcohol_preferred_below_threshold() {
        // gasoline at 5.00/l puts the threshold at 3.50/l
        let outcome = compare(&gasoline(100.0, 10.0, 5.0), &alcohol(100.0, 8.0, 3.49)).unwrap();
        assert_eq!(outcome.preferred, FuelType::Alcohol);
    }

    #[test]
    fn threshold_boundary_is_strict() {
        let outcome = compare(&gasoline(100.0, 10.0, 5.0), &alcohol(100.0, 8.0, 3.5)).unwrap();
        assert_eq!(outcome.preferred, FuelType::Gasoline);
    }

    #[test]
    fn tied_totals_can_still_prefer_gasoline() {
        // Both trips cost exactly 50.00, yet alcohol at 4.00/l sits above
        // the 3.50 threshold.
        let outcome = compare(&gasoline(100.0, 10.0, 5.0), &alcohol(100.0, 8.0, 4.0)).unwrap();
        assert_eq!(outcome.preferred, FuelType::Gasoline);
        assert!((outcome.preferred_cost - 50.0).abs() < TOLERANCE);
        assert!((outcome.other_cost - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn preferred_cost_comes_from_preferred_entry() {
        let outcome = compare(&gasoline(100.0, 10.0, 5.0), &alcohol(100.0, 8.0, 3.0)).unwrap();
        assert_eq!(outcome.preferred, FuelType::Alcohol);
        assert!((outcome.preferred_cost - 37.5).abs() < TOLERANCE);
        assert!((outcome.other_cost - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn mistyped_entries_rejected() {
        let gas = gasoline(100.0, 10.0, 5.0);
        let alc = alcohol(100.0, 8.0, 4.0);
        assert!(matches!(
            compare(&alc, &gas),
            Err(FuelError::InvariantViolation { .. })
        ));
        assert!(matches!(
            compare(&gas, &gas),
            Err(FuelError::InvariantViolation { .. })
        ));
    }
}
