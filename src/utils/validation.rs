use crate::domain::model::FuelEntry;
use crate::utils::error::{FuelError, Result};

/// Canonical validation window for one numeric form field. A value is valid
/// only strictly inside the window: `value <= min` is "below minimum" and
/// `value >= max` is "above maximum".
#[derive(Debug, Clone, Copy)]
pub struct FieldLimits {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

pub const DISTANCE_LIMITS: FieldLimits = FieldLimits {
    field: "distance",
    min: 0.1,
    max: 999_999.0,
};

pub const CONSUMPTION_LIMITS: FieldLimits = FieldLimits {
    field: "consumption",
    min: 0.1,
    max: 999.9,
};

pub const FUEL_PRICE_LIMITS: FieldLimits = FieldLimits {
    field: "fuelPrice",
    min: 0.01,
    max: 999.99,
};

pub fn validate_required(field: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or(FuelError::MissingField { field })
}

pub fn validate_in_limits(limits: FieldLimits, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= limits.min {
        return Err(FuelError::InvalidFieldValue {
            field: limits.field,
            value,
            reason: format!("must be greater than {}", limits.min),
        });
    }
    if value >= limits.max {
        return Err(FuelError::InvalidFieldValue {
            field: limits.field,
            value,
            reason: format!("must be less than {}", limits.max),
        });
    }
    Ok(value)
}

/// Required + window check in one step, for raw form fields.
pub fn validate_field(limits: FieldLimits, value: Option<f64>) -> Result<f64> {
    validate_in_limits(limits, validate_required(limits.field, value)?)
}

/// Checks an already-built entry against every field window. Entries only
/// exist inside the windows, so a failure here means the entry bypassed the
/// workflow (e.g. a hand-edited data file).
pub fn validate_entry(entry: &FuelEntry) -> Result<()> {
    validate_in_limits(DISTANCE_LIMITS, entry.distance)?;
    validate_in_limits(CONSUMPTION_LIMITS, entry.consumption)?;
    validate_in_limits(FUEL_PRICE_LIMITS, entry.fuel_price)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_names_the_field() {
        let err = validate_field(DISTANCE_LIMITS, None).unwrap_err();
        match err {
            FuelError::MissingField { field } => assert_eq!(field, "distance"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bounds_are_exclusive() {
        assert!(validate_in_limits(DISTANCE_LIMITS, 0.1).is_err());
        assert!(validate_in_limits(DISTANCE_LIMITS, 0.11).is_ok());
        assert!(validate_in_limits(DISTANCE_LIMITS, 999_999.0).is_err());
        assert!(validate_in_limits(DISTANCE_LIMITS, 999_998.9).is_ok());

        assert!(validate_in_limits(CONSUMPTION_LIMITS, 999.9).is_err());
        assert!(validate_in_limits(FUEL_PRICE_LIMITS, 0.01).is_err());
        assert!(validate_in_limits(FUEL_PRICE_LIMITS, 0.02).is_ok());
    }

    #[test]
    fn zero_and_negative_rejected() {
        assert!(validate_in_limits(DISTANCE_LIMITS, 0.0).is_err());
        assert!(validate_in_limits(CONSUMPTION_LIMITS, -5.0).is_err());
    }

    #[test]
    fn non_finite_rejected() {
        assert!(validate_in_limits(FUEL_PRICE_LIMITS, f64::NAN).is_err());
        assert!(validate_in_limits(DISTANCE_LIMITS, f64::INFINITY).is_err());
    }

    #[test]
    fn entry_check_covers_every_field() {
        use crate::domain::model::FuelType;

        let valid = FuelEntry {
            distance: 100.0,
            consumption: 10.0,
            fuel_type: FuelType::Gasoline,
            fuel_price: 5.0,
        };
        assert!(validate_entry(&valid).is_ok());

        let mut entry = valid;
        entry.consumption = 0.0;
        assert!(validate_entry(&entry).is_err());

        let mut entry = valid;
        entry.distance = -1.0;
        assert!(validate_entry(&entry).is_err());

        let mut entry = valid;
        entry.fuel_price = 1000.0;
        assert!(validate_entry(&entry).is_err());
    }
}
