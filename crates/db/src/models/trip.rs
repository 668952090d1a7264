//! Saved trip model, DTOs, and aggregate stats.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use loadbuck_core::calculator::TripResult;
use loadbuck_core::types::{DbId, Timestamp};

/// A row from the `trips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub user_id: DbId,
    pub rate_offered: f64,
    pub loaded_miles: f64,
    pub deadhead_miles: f64,
    pub total_miles: f64,
    pub origin: Option<String>,
    pub destination: Option<String>,
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
    pub recommendation: String,
    pub profit_margin_vs_break_even: f64,
    pub notes: Option<String>,
    pub actual_profit: Option<f64>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a trip. Derived columns come from a [`TripResult`].
#[derive(Debug, Clone)]
pub struct CreateTrip {
    pub result: TripResult,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub notes: Option<String>,
    /// `None` uses the column default (`calculated`).
    pub status: Option<String>,
    pub actual_profit: Option<f64>,
}

impl CreateTrip {
    pub fn new(result: TripResult) -> Self {
        Self {
            result,
            origin: None,
            destination: None,
            notes: None,
            status: None,
            actual_profit: None,
        }
    }
}

/// DTO for updating a saved trip after the fact. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrip {
    pub notes: Option<String>,
    pub actual_profit: Option<f64>,
    pub status: Option<String>,
}

/// Aggregate history stats for one user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TripStats {
    pub total_trips: i64,
    pub avg_profit: Option<f64>,
    pub avg_profit_per_mile: Option<f64>,
    pub yes_count: i64,
    pub borderline_count: i64,
    pub no_count: i64,
}
