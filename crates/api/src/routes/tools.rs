//! Route definitions for the public calculator tools.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{calculator, fuel_prices, tolls};
use crate::state::AppState;

/// Routes merged directly into `/api/v1`. None require auth.
///
/// ```text
/// POST /calculate       -> calculate_trip
/// POST /estimate-tolls  -> estimate_tolls
/// GET  /fuel-prices     -> get_fuel_prices
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculator::calculate_trip))
        .route("/estimate-tolls", post(tolls::estimate_tolls))
        .route("/fuel-prices", get(fuel_prices::get_fuel_prices))
}
