//! Handlers for the authenticated user's saved trip history.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use loadbuck_core::calculator::calculate;
use loadbuck_core::error::CoreError;
use loadbuck_core::search::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use loadbuck_core::trips::{validate_actual_profit, validate_notes, validate_place, validate_status};
use loadbuck_core::types::DbId;
use loadbuck_db::models::trip::{CreateTrip, Trip, TripStats, UpdateTrip};
use loadbuck_db::repositories::TripRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::form::CalculateRequest;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /trips`.
///
/// Carries the calculator inputs; any derived figures a client sends along
/// are ignored and recomputed.
#[derive(Debug, Deserialize)]
pub struct SaveTripRequest {
    #[serde(flatten)]
    pub inputs: CalculateRequest,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/trips?limit=&offset=
///
/// Newest first.
pub async fn list_trips(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Trip>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let trips = TripRepo::list_for_user(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: trips }))
}

/// POST /api/v1/trips
pub async fn create_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveTripRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Trip>>)> {
    let result = calculate(&input.inputs.to_inputs()?)?;

    let origin = trimmed(input.origin);
    let destination = trimmed(input.destination);
    if let Some(origin) = &origin {
        validate_place("origin", origin)?;
    }
    if let Some(destination) = &destination {
        validate_place("destination", destination)?;
    }
    if let Some(notes) = &input.notes {
        validate_notes(notes)?;
    }

    let create = CreateTrip {
        origin,
        destination,
        notes: input.notes,
        ..CreateTrip::new(result)
    };
    let trip = TripRepo::create(&state.pool, auth.user_id, &create).await?;

    tracing::info!(
        user_id = auth.user_id,
        trip_id = trip.id,
        recommendation = %trip.recommendation,
        "Trip saved",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: trip })))
}

/// GET /api/v1/trips/stats/summary
pub async fn trip_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TripStats>>> {
    let stats = TripRepo::stats_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/trips/{id}
pub async fn get_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Trip>>> {
    let trip = TripRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Trip", id }))?;
    Ok(Json(DataResponse { data: trip }))
}

/// PUT /api/v1/trips/{id}
///
/// Record what actually happened: notes, realized profit, status.
pub async fn update_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrip>,
) -> AppResult<Json<DataResponse<Trip>>> {
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    if let Some(notes) = &input.notes {
        validate_notes(notes)?;
    }
    if let Some(actual_profit) = input.actual_profit {
        validate_actual_profit(actual_profit)?;
    }

    let trip = TripRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Trip", id }))?;

    tracing::info!(user_id = auth.user_id, trip_id = id, status = %trip.status, "Trip updated");

    Ok(Json(DataResponse { data: trip }))
}

/// DELETE /api/v1/trips/{id}
pub async fn delete_trip(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TripRepo::delete(&state.pool, id, auth.user_id).await? {
        tracing::info!(user_id = auth.user_id, trip_id = id, "Trip deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Trip", id }))
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
