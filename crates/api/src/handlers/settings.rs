//! Handlers for the authenticated user's trip defaults.

use axum::extract::State;
use axum::Json;
use loadbuck_core::settings::validate_settings;
use loadbuck_db::models::settings::{UpdateSettings, UserSettings};
use loadbuck_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
///
/// Returns the user's settings, creating the default row on first access.
pub async fn get_settings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserSettings>>> {
    let settings = SettingsRepo::get_or_create(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/settings
///
/// Partial update. Omitted fields keep their stored value.
pub async fn update_settings(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateSettings>,
) -> AppResult<Json<DataResponse<UserSettings>>> {
    validate_settings(
        input.break_even_rate,
        input.mpg,
        input.fuel_tank_size,
        input.maintenance_reserve,
        input.driver_pay_rate,
    )?;

    let settings = SettingsRepo::upsert(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, "Settings updated");

    Ok(Json(DataResponse { data: settings }))
}
