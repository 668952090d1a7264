//! Trip profit calculation and the accept/decline recommendation.
//!
//! [`calculate`] turns a set of typed [`TripInputs`] into a [`TripResult`]:
//! cost breakdown, profit, profit per mile, and a three-way
//! [`Recommendation`] measured against the driver's break-even rate.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Deadhead miles assumed when the caller omits them.
pub const DEFAULT_DEADHEAD_MILES: f64 = 0.0;
/// Toll charge assumed when the caller omits it.
pub const DEFAULT_TOLLS: f64 = 0.0;
/// Maintenance reserve per mile assumed when the caller omits it.
pub const DEFAULT_MAINTENANCE_RESERVE: f64 = 0.15;
/// Break-even profit per mile assumed when the caller omits it.
pub const DEFAULT_BREAK_EVEN_RATE: f64 = 2.0;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Multiple of the break-even rate at or above which a load is a clear YES.
pub const YES_THRESHOLD_MULTIPLIER: f64 = 1.1;

/// Relative tolerance for the inclusive threshold comparisons, so a profit
/// per mile that is exactly on a boundary is not lost to float error.
/// Scaled by the threshold, so tiny break-even rates stay strict.
const THRESHOLD_RELATIVE_TOLERANCE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Typed trip parameters. Raw form text must be parsed before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripInputs {
    pub rate_offered: f64,
    pub loaded_miles: f64,
    pub deadhead_miles: f64,
    pub fuel_price: f64,
    pub mpg: f64,
    pub tolls: f64,
    pub maintenance_reserve: f64,
    pub break_even_rate: f64,
}

impl TripInputs {
    /// Build inputs from the four required fields, using defaults for the rest.
    pub fn new(rate_offered: f64, loaded_miles: f64, fuel_price: f64, mpg: f64) -> Self {
        Self {
            rate_offered,
            loaded_miles,
            deadhead_miles: DEFAULT_DEADHEAD_MILES,
            fuel_price,
            mpg,
            tolls: DEFAULT_TOLLS,
            maintenance_reserve: DEFAULT_MAINTENANCE_RESERVE,
            break_even_rate: DEFAULT_BREAK_EVEN_RATE,
        }
    }
}

/// Whether a load is worth taking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    No,
    Borderline,
    Yes,
}

impl Recommendation {
    /// Classify a profit per mile against a break-even rate.
    ///
    /// Evaluated in order: `>= 1.1x` is YES, `>= 1.0x` is BORDERLINE,
    /// anything else is NO. Both boundaries are inclusive.
    pub fn classify(profit_per_mile: f64, break_even_rate: f64) -> Self {
        if reaches(profit_per_mile, break_even_rate * YES_THRESHOLD_MULTIPLIER) {
            Self::Yes
        } else if reaches(profit_per_mile, break_even_rate) {
            Self::Borderline
        } else {
            Self::No
        }
    }

    /// Stored / wire representation (`"YES"`, `"BORDERLINE"`, `"NO"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::Borderline => "BORDERLINE",
            Self::No => "NO",
        }
    }

    /// Parse the stored representation. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "YES" => Some(Self::Yes),
            "BORDERLINE" => Some(Self::Borderline),
            "NO" => Some(Self::No),
            _ => None,
        }
    }
}

/// `value >= threshold`, allowing float error proportional to the threshold.
fn reaches(value: f64, threshold: f64) -> bool {
    value >= threshold - threshold.abs() * THRESHOLD_RELATIVE_TOLERANCE
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full cost breakdown for a trip. Every field is derivable from the inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResult {
    pub rate_offered: f64,
    pub loaded_miles: f64,
    pub deadhead_miles: f64,
    pub total_miles: f64,
    pub fuel_price: f64,
    pub mpg: f64,
    pub tolls: f64,
    pub maintenance_reserve: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    pub profit_per_mile: f64,
    pub break_even_rate: f64,
    pub recommendation: Recommendation,
    /// Percent above (or below) break-even, one decimal place.
    pub profit_margin_vs_break_even: f64,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Compute the cost breakdown, profit and recommendation for a trip.
///
/// Returns [`CoreError::Validation`] for non-finite values, negative
/// mileage or prices, a non-positive `mpg` or break-even rate, and a zero
/// total distance. The function never yields NaN or infinity.
pub fn calculate(inputs: &TripInputs) -> Result<TripResult, CoreError> {
    validate_inputs(inputs)?;

    let total_miles = inputs.loaded_miles + inputs.deadhead_miles;
    if total_miles <= 0.0 {
        return Err(CoreError::Validation(
            "Total miles must be greater than zero".into(),
        ));
    }

    let gallons_needed = total_miles / inputs.mpg;
    let fuel_cost = gallons_needed * inputs.fuel_price;
    let maintenance_cost = total_miles * inputs.maintenance_reserve;
    let total_expenses = fuel_cost + inputs.tolls + maintenance_cost;
    let total_profit = inputs.rate_offered - total_expenses;
    let profit_per_mile = total_profit / total_miles;
    let margin = (profit_per_mile / inputs.break_even_rate - 1.0) * 100.0;

    let derived = [
        ("total_miles", total_miles),
        ("fuel_cost", fuel_cost),
        ("maintenance_cost", maintenance_cost),
        ("total_expenses", total_expenses),
        ("total_profit", total_profit),
        ("profit_per_mile", profit_per_mile),
        ("profit_margin_vs_break_even", margin),
    ];
    if let Some((name, _)) = derived.iter().find(|(_, v)| !v.is_finite()) {
        return Err(CoreError::Validation(format!(
            "Inputs are out of range: {name} overflows"
        )));
    }

    let recommendation = Recommendation::classify(profit_per_mile, inputs.break_even_rate);

    Ok(TripResult {
        rate_offered: inputs.rate_offered,
        loaded_miles: inputs.loaded_miles,
        deadhead_miles: inputs.deadhead_miles,
        total_miles,
        fuel_price: inputs.fuel_price,
        mpg: inputs.mpg,
        tolls: inputs.tolls,
        maintenance_reserve: inputs.maintenance_reserve,
        fuel_cost: round_currency(fuel_cost),
        maintenance_cost: round_currency(maintenance_cost),
        total_expenses: round_currency(total_expenses),
        total_profit: round_currency(total_profit),
        profit_per_mile: round_currency(profit_per_mile),
        break_even_rate: inputs.break_even_rate,
        recommendation,
        profit_margin_vs_break_even: round_to(margin, 1),
    })
}

fn validate_inputs(inputs: &TripInputs) -> Result<(), CoreError> {
    let fields = [
        ("rate_offered", inputs.rate_offered),
        ("loaded_miles", inputs.loaded_miles),
        ("deadhead_miles", inputs.deadhead_miles),
        ("fuel_price", inputs.fuel_price),
        ("mpg", inputs.mpg),
        ("tolls", inputs.tolls),
        ("maintenance_reserve", inputs.maintenance_reserve),
        ("break_even_rate", inputs.break_even_rate),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!("{name} must be a finite number")));
        }
    }

    let non_negative = [
        ("rate_offered", inputs.rate_offered),
        ("loaded_miles", inputs.loaded_miles),
        ("deadhead_miles", inputs.deadhead_miles),
        ("fuel_price", inputs.fuel_price),
        ("tolls", inputs.tolls),
        ("maintenance_reserve", inputs.maintenance_reserve),
    ];
    for (name, value) in non_negative {
        if value < 0.0 {
            return Err(CoreError::Validation(format!("{name} must not be negative")));
        }
    }

    if inputs.mpg <= 0.0 {
        return Err(CoreError::Validation("mpg must be greater than zero".into()));
    }
    if inputs.break_even_rate <= 0.0 {
        return Err(CoreError::Validation(
            "break_even_rate must be greater than zero".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// Round to cents, half away from zero.
pub fn round_currency(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to `decimals` places, half away from zero.
///
/// Values too large to scale are returned unchanged; they have no
/// fractional digits left to round anyway.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
