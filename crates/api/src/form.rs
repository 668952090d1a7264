//! Lenient numeric parsing for request bodies.
//!
//! Calculator forms post numbers either as JSON numbers or as the raw text
//! of an input field (`"2500"`, `" 3.85 "`). Everything is converted to
//! `f64` here so the core calculator only ever sees typed values.

use loadbuck_core::calculator::{
    TripInputs, DEFAULT_BREAK_EVEN_RATE, DEFAULT_DEADHEAD_MILES, DEFAULT_MAINTENANCE_RESERVE,
    DEFAULT_TOLLS,
};
use loadbuck_core::error::CoreError;
use serde::Deserialize;

/// A form value that may arrive as a JSON number or as numeric text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// Parse into an `f64`. Blank text counts as absent.
    fn parse(&self, field: &str) -> Result<Option<f64>, CoreError> {
        match self {
            NumberOrText::Number(n) => Ok(Some(*n)),
            NumberOrText::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                s.parse::<f64>()
                    .map(Some)
                    .map_err(|_| CoreError::Validation(format!("{field} must be a number")))
            }
        }
    }
}

/// Parse an optional field. Absent, `null` and blank values all yield `None`.
pub fn optional_number(field: &str, value: Option<&NumberOrText>) -> Result<Option<f64>, CoreError> {
    match value {
        Some(v) => v.parse(field),
        None => Ok(None),
    }
}

/// Parse a field that must be present.
pub fn required_number(field: &str, value: Option<&NumberOrText>) -> Result<f64, CoreError> {
    optional_number(field, value)?
        .ok_or_else(|| CoreError::Validation(format!("Missing required field: {field}")))
}

/// Parse a field, falling back to `default` when it is absent or not numeric.
pub fn number_or_default(value: Option<&NumberOrText>, default: f64) -> f64 {
    optional_number("", value).ok().flatten().unwrap_or(default)
}

// ---------------------------------------------------------------------------
// Calculator form
// ---------------------------------------------------------------------------

/// Calculator inputs as posted by a client.
///
/// `rate_offered`, `loaded_miles`, `fuel_price` and `mpg` are required; the
/// rest fall back to the calculator defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    pub rate_offered: Option<NumberOrText>,
    pub loaded_miles: Option<NumberOrText>,
    pub deadhead_miles: Option<NumberOrText>,
    pub fuel_price: Option<NumberOrText>,
    pub mpg: Option<NumberOrText>,
    pub tolls: Option<NumberOrText>,
    pub maintenance_reserve: Option<NumberOrText>,
    pub break_even_rate: Option<NumberOrText>,
}

impl CalculateRequest {
    /// Convert to typed [`TripInputs`].
    ///
    /// Fails with [`CoreError::Validation`] when a required field is missing
    /// or any present field is not numeric. Range checks are left to
    /// [`loadbuck_core::calculator::calculate`].
    pub fn to_inputs(&self) -> Result<TripInputs, CoreError> {
        Ok(TripInputs {
            rate_offered: required_number("rate_offered", self.rate_offered.as_ref())?,
            loaded_miles: required_number("loaded_miles", self.loaded_miles.as_ref())?,
            deadhead_miles: optional_number("deadhead_miles", self.deadhead_miles.as_ref())?
                .unwrap_or(DEFAULT_DEADHEAD_MILES),
            fuel_price: required_number("fuel_price", self.fuel_price.as_ref())?,
            mpg: required_number("mpg", self.mpg.as_ref())?,
            tolls: optional_number("tolls", self.tolls.as_ref())?.unwrap_or(DEFAULT_TOLLS),
            maintenance_reserve: optional_number(
                "maintenance_reserve",
                self.maintenance_reserve.as_ref(),
            )?
            .unwrap_or(DEFAULT_MAINTENANCE_RESERVE),
            break_even_rate: optional_number("break_even_rate", self.break_even_rate.as_ref())?
                .unwrap_or(DEFAULT_BREAK_EVEN_RATE),
        })
    }
}
