//! Handler for the static fuel price table.

use axum::Json;
use loadbuck_core::fuel_prices::{current_prices, FuelPrices};

use crate::response::DataResponse;

/// GET /api/v1/fuel-prices
pub async fn get_fuel_prices() -> Json<DataResponse<FuelPrices>> {
    Json(DataResponse {
        data: current_prices(),
    })
}
