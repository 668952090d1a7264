//! Per-user default trip settings and their validation.

use crate::calculator::{DEFAULT_BREAK_EVEN_RATE, DEFAULT_MAINTENANCE_RESERVE};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults (match the column defaults in the `user_settings` migration)
// ---------------------------------------------------------------------------

pub const DEFAULT_SETTINGS_BREAK_EVEN_RATE: f64 = DEFAULT_BREAK_EVEN_RATE;
pub const DEFAULT_SETTINGS_MPG: f64 = 7.0;
pub const DEFAULT_FUEL_TANK_SIZE: f64 = 150.0;
pub const DEFAULT_SETTINGS_MAINTENANCE_RESERVE: f64 = DEFAULT_MAINTENANCE_RESERVE;
pub const DEFAULT_DRIVER_PAY_RATE: f64 = 0.65;

/// Fuel economy seeded for the demo account.
pub const DEMO_MPG: f64 = 7.5;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a (possibly partial) settings update.
///
/// `None` means "leave unchanged" and always passes.
pub fn validate_settings(
    break_even_rate: Option<f64>,
    mpg: Option<f64>,
    fuel_tank_size: Option<f64>,
    maintenance_reserve: Option<f64>,
    driver_pay_rate: Option<f64>,
) -> Result<(), CoreError> {
    require_positive("break_even_rate", break_even_rate)?;
    require_positive("mpg", mpg)?;
    require_positive("fuel_tank_size", fuel_tank_size)?;
    require_non_negative("maintenance_reserve", maintenance_reserve)?;
    require_non_negative("driver_pay_rate", driver_pay_rate)?;
    Ok(())
}

fn require_positive(name: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(CoreError::Validation(format!(
            "{name} must be a positive number"
        ))),
        _ => Ok(()),
    }
}

fn require_non_negative(name: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(CoreError::Validation(format!(
            "{name} must be zero or greater"
        ))),
        _ => Ok(()),
    }
}
