//! Repository for the `user_settings` table.

use loadbuck_core::settings::{
    DEFAULT_DRIVER_PAY_RATE, DEFAULT_FUEL_TANK_SIZE, DEFAULT_SETTINGS_BREAK_EVEN_RATE,
    DEFAULT_SETTINGS_MAINTENANCE_RESERVE, DEFAULT_SETTINGS_MPG,
};
use loadbuck_core::types::DbId;
use sqlx::PgPool;

use crate::models::settings::{UpdateSettings, UserSettings};

/// Column list for `user_settings` queries.
const COLUMNS: &str = "\
    user_id, break_even_rate, mpg, fuel_tank_size, maintenance_reserve, \
    driver_pay_rate, created_at, updated_at";

/// Provides data access for per-user settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Get the settings row for a user, inserting the defaults first if the
    /// user has none yet.
    pub async fn get_or_create(pool: &PgPool, user_id: DbId) -> Result<UserSettings, sqlx::Error> {
        Self::create_defaults(pool, user_id).await?;

        let query = format!("SELECT {COLUMNS} FROM user_settings WHERE user_id = $1");
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Insert a default row. Returns `true` if a row was created, `false` if
    /// the user already had settings.
    pub async fn create_defaults(pool: &PgPool, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_settings \
                 (user_id, break_even_rate, mpg, fuel_tank_size, maintenance_reserve, driver_pay_rate) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(DEFAULT_SETTINGS_BREAK_EVEN_RATE)
        .bind(DEFAULT_SETTINGS_MPG)
        .bind(DEFAULT_FUEL_TANK_SIZE)
        .bind(DEFAULT_SETTINGS_MAINTENANCE_RESERVE)
        .bind(DEFAULT_DRIVER_PAY_RATE)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert or update a user's settings.
    ///
    /// An existing row only changes the fields that are `Some`. A new row
    /// takes the `loadbuck_core::settings` defaults for omitted fields.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        dto: &UpdateSettings,
    ) -> Result<UserSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_settings \
                 (user_id, break_even_rate, mpg, fuel_tank_size, maintenance_reserve, driver_pay_rate) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 break_even_rate = COALESCE($7, user_settings.break_even_rate), \
                 mpg = COALESCE($8, user_settings.mpg), \
                 fuel_tank_size = COALESCE($9, user_settings.fuel_tank_size), \
                 maintenance_reserve = COALESCE($10, user_settings.maintenance_reserve), \
                 driver_pay_rate = COALESCE($11, user_settings.driver_pay_rate) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(user_id)
            .bind(dto.break_even_rate.unwrap_or(DEFAULT_SETTINGS_BREAK_EVEN_RATE))
            .bind(dto.mpg.unwrap_or(DEFAULT_SETTINGS_MPG))
            .bind(dto.fuel_tank_size.unwrap_or(DEFAULT_FUEL_TANK_SIZE))
            .bind(dto.maintenance_reserve.unwrap_or(DEFAULT_SETTINGS_MAINTENANCE_RESERVE))
            .bind(dto.driver_pay_rate.unwrap_or(DEFAULT_DRIVER_PAY_RATE))
            .bind(dto.break_even_rate)
            .bind(dto.mpg)
            .bind(dto.fuel_tank_size)
            .bind(dto.maintenance_reserve)
            .bind(dto.driver_pay_rate)
            .fetch_one(pool)
            .await
    }
}
