//! Handlers for the `/auth` resource (register, login, demo, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use loadbuck_core::calculator::calculate;
use loadbuck_core::demo::{sample_trips, DEMO_EMAIL, DEMO_NAME, DEMO_PASSWORD};
use loadbuck_core::error::CoreError;
use loadbuck_core::settings::DEMO_MPG;
use loadbuck_db::models::settings::UpdateSettings;
use loadbuck_db::models::trip::CreateTrip;
use loadbuck_db::models::user::{CreateUser, User, UserResponse};
use loadbuck_db::repositories::{SettingsRepo, TripRepo, UserRepo};
use loadbuck_db::DbPool;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by register, login and demo.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account with default settings and sign it in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password)?;

    let email = input.email.trim().to_lowercase();
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)?;

    let name = input
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    // A concurrent registration for the same email surfaces as a 409 from
    // the `uq_users_email` constraint.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
            name,
        },
    )
    .await?;
    SettingsRepo::create_defaults(&state.pool, user.id).await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((StatusCode::CREATED, Json(auth_response(&state, &user)?)))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(&input.password, &user.password_hash)? {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(auth_response(&state, &user)?))
}

/// POST /api/v1/auth/demo
///
/// Sign in to the shared demo account, creating and seeding it on first use.
pub async fn demo(State(state): State<AppState>) -> AppResult<Json<AuthResponse>> {
    let user = match UserRepo::find_by_email(&state.pool, DEMO_EMAIL).await? {
        Some(user) => user,
        None => create_demo_user(&state.pool).await?,
    };

    Ok(Json(auth_response(&state, &user)?))
}

/// GET /api/v1/auth/me
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid email or password".into(),
    ))
}

fn auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    Ok(AuthResponse {
        token,
        user: UserResponse::from(user),
    })
}

/// Create the demo user with its settings and sample history.
///
/// If another request created the account first, that account is returned
/// without seeding it a second time.
async fn create_demo_user(pool: &DbPool) -> AppResult<User> {
    let password_hash = hash_password(DEMO_PASSWORD)?;

    let input = CreateUser {
        email: DEMO_EMAIL.to_string(),
        password_hash,
        name: Some(DEMO_NAME.to_string()),
    };

    let user = match UserRepo::create(pool, &input).await {
        Ok(user) => user,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return UserRepo::find_by_email(pool, DEMO_EMAIL)
                .await?
                .ok_or_else(|| AppError::InternalError("Demo user vanished".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let settings = UpdateSettings {
        mpg: Some(DEMO_MPG),
        ..Default::default()
    };
    SettingsRepo::upsert(pool, user.id, &settings).await?;

    for sample in sample_trips() {
        let result = calculate(&sample.inputs)?;
        let trip = CreateTrip {
            origin: Some(sample.origin.to_string()),
            destination: Some(sample.destination.to_string()),
            status: Some(sample.status.to_string()),
            actual_profit: sample.actual_profit,
            ..CreateTrip::new(result)
        };
        TripRepo::create(pool, user.id, &trip).await?;
    }

    tracing::info!(user_id = user.id, "Demo account created and seeded");

    Ok(user)
}
