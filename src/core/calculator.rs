use crate::domain::model::FuelEntry;

/// Total cost of covering `distance` km at `consumption` km/l and
/// `fuel_price` currency per liter. Returns the unrounded value; rounding is
/// display-only so comparisons never compound rounding error.
pub fn total_cost(distance: f64, consumption: f64, fuel_price: f64) -> f64 {
    // Validation rejects zero consumption before this is reachable.
    debug_assert!(consumption > 0.0);
    let cost_per_km = fuel_price / consumption;
    distance * cost_per_km
}

pub fn entry_cost(entry: &FuelEntry) -> f64 {
    total_cost(entry.distance, entry.consumption, entry.fuel_price)
}

/// Two-decimal currency rendering, as the results view shows it.
pub fn format_cost(cost: f64) -> String {
    format!("R$ {cost:.2}")
}
