//! Handler for the public toll estimator.

use axum::extract::State;
use axum::Json;
use loadbuck_core::tolls::TollEstimate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::form::{number_or_default, NumberOrText};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /estimate-tolls`.
#[derive(Debug, Deserialize)]
pub struct EstimateTollsRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// Optional; missing or non-numeric values count as zero.
    pub route_miles: Option<NumberOrText>,
}

/// POST /api/v1/estimate-tolls
pub async fn estimate_tolls(
    State(state): State<AppState>,
    Json(input): Json<EstimateTollsRequest>,
) -> AppResult<Json<DataResponse<TollEstimate>>> {
    let (origin, destination) = match (non_blank(input.origin), non_blank(input.destination)) {
        (Some(o), Some(d)) => (o, d),
        _ => {
            return Err(AppError::BadRequest(
                "Origin and destination required".into(),
            ))
        }
    };

    let miles = number_or_default(input.route_miles.as_ref(), 0.0);
    let estimate = state.toll_table.estimate(&origin, &destination, miles);

    tracing::debug!(
        origin = %origin,
        destination = %destination,
        estimated_tolls = estimate.estimated_tolls,
        "Tolls estimated",
    );

    Ok(Json(DataResponse { data: estimate }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
