//! Integration tests for the user, settings, and trip repositories.
//!
//! These run against a real PostgreSQL database and are ignored by default.
//! Run with `DATABASE_URL=... cargo test -p loadbuck-db -- --ignored`.

use loadbuck_core::calculator::{calculate, TripInputs};
use loadbuck_core::settings::{
    DEFAULT_DRIVER_PAY_RATE, DEFAULT_FUEL_TANK_SIZE, DEFAULT_SETTINGS_BREAK_EVEN_RATE,
    DEFAULT_SETTINGS_MAINTENANCE_RESERVE, DEFAULT_SETTINGS_MPG,
};
use loadbuck_core::trips::{STATUS_CALCULATED, STATUS_COMPLETED};
use loadbuck_db::models::settings::UpdateSettings;
use loadbuck_db::models::trip::{CreateTrip, UpdateTrip};
use loadbuck_db::models::user::{CreateUser, User};
use loadbuck_db::repositories::{SettingsRepo, TripRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$not-a-real-hash".to_string(),
        name: Some("Test Driver".to_string()),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

fn new_trip(rate_offered: f64) -> CreateTrip {
    let result = calculate(&TripInputs::new(rate_offered, 500.0, 3.85, 7.0))
        .expect("inputs are valid");
    CreateTrip::new(result)
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn duplicate_email_violates_unique_constraint(pool: PgPool) {
    new_user(&pool, "dup@test.com").await;

    let input = CreateUser {
        email: "dup@test.com".to_string(),
        password_hash: "x".to_string(),
        name: None,
    };
    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_users_email"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn find_by_email_ignores_case(pool: PgPool) {
    let user = new_user(&pool, "Driver@Test.com").await;
    let found = UserRepo::find_by_email(&pool, "driver@test.com")
        .await
        .unwrap()
        .expect("user should be found");
    assert_eq!(found.id, user.id);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn settings_are_created_lazily_with_defaults(pool: PgPool) {
    let user = new_user(&pool, "settings@test.com").await;

    let settings = SettingsRepo::get_or_create(&pool, user.id).await.unwrap();
    assert_eq!(settings.break_even_rate, DEFAULT_SETTINGS_BREAK_EVEN_RATE);
    assert_eq!(settings.mpg, DEFAULT_SETTINGS_MPG);
    assert_eq!(settings.fuel_tank_size, DEFAULT_FUEL_TANK_SIZE);
    assert_eq!(settings.maintenance_reserve, DEFAULT_SETTINGS_MAINTENANCE_RESERVE);
    assert_eq!(settings.driver_pay_rate, DEFAULT_DRIVER_PAY_RATE);

    // A second call returns the same row rather than inserting another.
    assert!(!SettingsRepo::create_defaults(&pool, user.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn partial_settings_update_keeps_other_fields(pool: PgPool) {
    let user = new_user(&pool, "partial@test.com").await;

    let first = UpdateSettings {
        mpg: Some(6.2),
        driver_pay_rate: Some(0.7),
        ..Default::default()
    };
    SettingsRepo::upsert(&pool, user.id, &first).await.unwrap();

    let second = UpdateSettings {
        break_even_rate: Some(1.75),
        ..Default::default()
    };
    let settings = SettingsRepo::upsert(&pool, user.id, &second).await.unwrap();

    assert_eq!(settings.break_even_rate, 1.75);
    assert_eq!(settings.mpg, 6.2);
    assert_eq!(settings.driver_pay_rate, 0.7);
    assert_eq!(settings.fuel_tank_size, DEFAULT_FUEL_TANK_SIZE);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn first_upsert_fills_omitted_fields_with_defaults(pool: PgPool) {
    let user = new_user(&pool, "first-upsert@test.com").await;

    let dto = UpdateSettings {
        mpg: Some(5.9),
        ..Default::default()
    };
    let settings = SettingsRepo::upsert(&pool, user.id, &dto).await.unwrap();

    assert_eq!(settings.mpg, 5.9);
    assert_eq!(settings.break_even_rate, DEFAULT_SETTINGS_BREAK_EVEN_RATE);
    assert_eq!(settings.fuel_tank_size, DEFAULT_FUEL_TANK_SIZE);
    assert_eq!(settings.maintenance_reserve, DEFAULT_SETTINGS_MAINTENANCE_RESERVE);
    assert_eq!(settings.driver_pay_rate, DEFAULT_DRIVER_PAY_RATE);
}

// ---------------------------------------------------------------------------
// Trips
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn create_and_list_trips_newest_first(pool: PgPool) {
    let user = new_user(&pool, "trips@test.com").await;

    let first = TripRepo::create(&pool, user.id, &new_trip(1500.0)).await.unwrap();
    let second = TripRepo::create(&pool, user.id, &new_trip(2500.0)).await.unwrap();

    assert_eq!(first.status, STATUS_CALCULATED);
    assert_eq!(first.total_miles, 500.0);
    assert_eq!(first.total_expenses, 350.0);
    assert_eq!(first.maintenance_cost, 75.0);
    assert_eq!(second.recommendation, "YES");

    let trips = TripRepo::list_for_user(&pool, user.id, 50, 0).await.unwrap();
    let ids: Vec<_> = trips.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn trips_are_isolated_per_user(pool: PgPool) {
    let owner = new_user(&pool, "owner@test.com").await;
    let other = new_user(&pool, "other@test.com").await;
    let trip = TripRepo::create(&pool, owner.id, &new_trip(2000.0)).await.unwrap();

    assert!(TripRepo::find_for_user(&pool, trip.id, other.id)
        .await
        .unwrap()
        .is_none());
    assert!(TripRepo::update(&pool, trip.id, other.id, &UpdateTrip::default())
        .await
        .unwrap()
        .is_none());
    assert!(!TripRepo::delete(&pool, trip.id, other.id).await.unwrap());
    assert!(TripRepo::list_for_user(&pool, other.id, 50, 0)
        .await
        .unwrap()
        .is_empty());

    assert!(TripRepo::delete(&pool, trip.id, owner.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn update_fills_in_actual_profit(pool: PgPool) {
    let user = new_user(&pool, "update@test.com").await;
    let trip = TripRepo::create(&pool, user.id, &new_trip(2000.0)).await.unwrap();

    let update = UpdateTrip {
        notes: Some("Detention at receiver".into()),
        actual_profit: Some(1450.0),
        status: Some(STATUS_COMPLETED.into()),
    };
    let updated = TripRepo::update(&pool, trip.id, user.id, &update)
        .await
        .unwrap()
        .expect("trip should exist");

    assert_eq!(updated.actual_profit, Some(1450.0));
    assert_eq!(updated.status, STATUS_COMPLETED);
    assert_eq!(updated.notes.as_deref(), Some("Detention at receiver"));
    assert_eq!(updated.total_profit, trip.total_profit);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn stats_count_recommendations(pool: PgPool) {
    let user = new_user(&pool, "stats@test.com").await;

    let empty = TripRepo::stats_for_user(&pool, user.id).await.unwrap();
    assert_eq!(empty.total_trips, 0);
    assert!(empty.avg_profit.is_none());

    TripRepo::create(&pool, user.id, &new_trip(2500.0)).await.unwrap(); // YES
    TripRepo::create(&pool, user.id, &new_trip(1400.0)).await.unwrap(); // BORDERLINE
    TripRepo::create(&pool, user.id, &new_trip(500.0)).await.unwrap(); // NO

    let stats = TripRepo::stats_for_user(&pool, user.id).await.unwrap();
    assert_eq!(stats.total_trips, 3);
    assert_eq!(stats.yes_count, 1);
    assert_eq!(stats.borderline_count, 1);
    assert_eq!(stats.no_count, 1);
    assert!(stats.avg_profit.is_some());
}
