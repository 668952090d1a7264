//! Per-user default trip settings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use loadbuck_core::types::{DbId, Timestamp};

/// A row from the `user_settings` table. One per user, created lazily.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSettings {
    pub user_id: DbId,
    pub break_even_rate: f64,
    pub mpg: f64,
    pub fuel_tank_size: f64,
    pub maintenance_reserve: f64,
    pub driver_pay_rate: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting settings. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettings {
    pub break_even_rate: Option<f64>,
    pub mpg: Option<f64>,
    pub fuel_tank_size: Option<f64>,
    pub maintenance_reserve: Option<f64>,
    pub driver_pay_rate: Option<f64>,
}
