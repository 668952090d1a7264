//! Repository for the `trips` table.
//!
//! Every query is scoped by `user_id`: a trip owned by someone else behaves
//! exactly like a trip that does not exist.

use sqlx::PgPool;
use loadbuck_core::calculator::Recommendation;
use loadbuck_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip, TripStats, UpdateTrip};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, user_id, rate_offered, loaded_miles, deadhead_miles, total_miles, origin, destination, \
    fuel_price, mpg, tolls, maintenance_reserve, fuel_cost, maintenance_cost, total_expenses, \
    total_profit, profit_per_mile, break_even_rate, recommendation, profit_margin_vs_break_even, \
    notes, actual_profit, status, \
    created_at, updated_at";

/// Provides CRUD operations for saved trips.
pub struct TripRepo;

impl TripRepo {
    /// Insert a trip for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTrip,
    ) -> Result<Trip, sqlx::Error> {
        let r = &input.result;
        let query = format!(
            "INSERT INTO trips (
                user_id, rate_offered, loaded_miles, deadhead_miles, total_miles, origin,
                destination, fuel_price, mpg, tolls, maintenance_reserve, fuel_cost,
                maintenance_cost, total_expenses, total_profit, profit_per_mile,
                break_even_rate, recommendation, profit_margin_vs_break_even, notes, status,
                actual_profit
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, COALESCE($21, 'calculated'), $22)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .bind(r.rate_offered)
            .bind(r.loaded_miles)
            .bind(r.deadhead_miles)
            .bind(r.total_miles)
            .bind(&input.origin)
            .bind(&input.destination)
            .bind(r.fuel_price)
            .bind(r.mpg)
            .bind(r.tolls)
            .bind(r.maintenance_reserve)
            .bind(r.fuel_cost)
            .bind(r.maintenance_cost)
            .bind(r.total_expenses)
            .bind(r.total_profit)
            .bind(r.profit_per_mile)
            .bind(r.break_even_rate)
            .bind(r.recommendation.as_str())
            .bind(r.profit_margin_vs_break_even)
            .bind(&input.notes)
            .bind(&input.status)
            .bind(input.actual_profit)
            .fetch_one(pool)
            .await
    }

    /// List a user's trips, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find one of the user's trips by ID.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update notes, actual profit, or status. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the trip does not exist or belongs to another user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateTrip,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "UPDATE trips SET
                notes = COALESCE($3, notes),
                actual_profit = COALESCE($4, actual_profit),
                status = COALESCE($5, status)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.notes)
            .bind(input.actual_profit)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the user's trips. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate counts and averages over all of a user's trips.
    pub async fn stats_for_user(pool: &PgPool, user_id: DbId) -> Result<TripStats, sqlx::Error> {
        sqlx::query_as::<_, TripStats>(
            "SELECT
                COUNT(*) AS total_trips,
                AVG(total_profit) AS avg_profit,
                AVG(profit_per_mile) AS avg_profit_per_mile,
                COUNT(*) FILTER (WHERE recommendation = $2) AS yes_count,
                COUNT(*) FILTER (WHERE recommendation = $3) AS borderline_count,
                COUNT(*) FILTER (WHERE recommendation = $4) AS no_count
             FROM trips
             WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(Recommendation::Yes.as_str())
        .bind(Recommendation::Borderline.as_str())
        .bind(Recommendation::No.as_str())
        .fetch_one(pool)
        .await
    }
}
