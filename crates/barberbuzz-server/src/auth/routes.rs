// Authentication HTTP routes: login, logout, signup
// Decision: missing body fields answer 400 with a message rather than a
// bare deserialization rejection

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::CookieJar;
use barberbuzz_core::Identity;
use serde::{Deserialize, Serialize};

use super::{password::hash_password, verifier::authenticate};
use crate::{api::common::ApiError, storage::CreateBarberRow, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub shop_name: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Created-account subset returned by signup; never echoes the hash
#[derive(Debug, Serialize)]
pub struct SignupBarber {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub barber: SignupBarber,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/signup", post(signup))
}

/// POST /api/login - Verify credentials and set the session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Identity>), ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let identity = authenticate(&state.db, &req.email, &req.password).await?;

    let token = state.sessions.issue(&identity).map_err(|e| {
        tracing::error!("Session token issuance failed: {:#}", e);
        ApiError::internal("An error occurred during login")
    })?;

    tracing::debug!(barber = %identity.id, "Login succeeded");
    let jar = jar.add(state.sessions.session_cookie(token));
    Ok((jar, Json(identity)))
}

/// POST /api/logout - Clear the session cookie.
/// Succeeds regardless of whether a session existed; there is no
/// server-side invalidation list.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<LogoutResponse>) {
    let jar = jar.add(state.sessions.clear_cookie());
    (jar, Json(LogoutResponse { success: true }))
}

/// POST /api/signup - Create a non-admin barber account
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() || req.shop_name.is_empty()
    {
        return Err(ApiError::bad_request(
            "Name, email, password, and shop name are required",
        ));
    }

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!("Password hashing failed: {:#}", e);
        ApiError::internal("An error occurred during signup")
    })?;

    let barber = state
        .db
        .create_barber(CreateBarberRow {
            name: req.name,
            email: req.email,
            password_hash,
            is_admin: false,
        })
        .await
        .map_err(|e| {
            tracing::error!("Barber creation failed: {:#}", e);
            ApiError::service_unavailable("Failed to create barber")
        })?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            barber: SignupBarber {
                id: barber.id,
                name: barber.name,
                email: barber.email,
            },
        }),
    ))
}
