pub mod auth;
pub mod health;
pub mod settings;
pub mod tools;
pub mod trips;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /calculate                  profit calculator (public)
/// /estimate-tolls             toll estimator (public)
/// /fuel-prices                fuel price table (public)
///
/// /auth/register              register (public)
/// /auth/login                 login (public)
/// /auth/demo                  demo account sign-in (public)
/// /auth/me                    current user (requires auth)
///
/// /settings                   get, update (requires auth)
///
/// /trips                      list, create (requires auth)
/// /trips/stats/summary        history stats
/// /trips/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public calculator tools.
        .merge(tools::router())
        // Authentication routes (register, login, demo, me).
        .nest("/auth", auth::router())
        // Per-user trip defaults.
        .nest("/settings", settings::router())
        // Saved trip history.
        .nest("/trips", trips::router())
}
