//! Handler for the public profit calculator.

use axum::Json;
use loadbuck_core::calculator::{calculate, TripResult};

use crate::error::AppResult;
use crate::form::CalculateRequest;
use crate::response::DataResponse;

/// POST /api/v1/calculate
///
/// Compute the cost breakdown and recommendation for a trip. No auth.
pub async fn calculate_trip(
    Json(input): Json<CalculateRequest>,
) -> AppResult<Json<DataResponse<TripResult>>> {
    let inputs = input.to_inputs()?;
    let result = calculate(&inputs)?;
    Ok(Json(DataResponse { data: result }))
}
