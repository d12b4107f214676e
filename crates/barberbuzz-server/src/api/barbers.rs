// Barber endpoints: public listing and admin-only account creation

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use barberbuzz_core::{Barber, Store};
use serde::{Deserialize, Serialize};

use super::common::ApiError;
use crate::{
    auth::{password::hash_password, AdminUser},
    storage::{CreateBarberRow, CreateStoreRow},
    AppState,
};

const DEFAULT_PRIMARY_COLOR: &str = "#0057D9";
const DEFAULT_ACCENT_COLOR: &str = "#FFD339";

/// Body of POST /api/admin/barbers. A store can be created alongside the
/// account in one call.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBarberRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub create_store: bool,
    pub store_name: Option<String>,
    pub store_slug: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateBarberResponse {
    pub barber: Barber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<Store>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/barbers", get(list_barbers))
        .route("/api/admin/barbers", post(create_barber))
}

/// GET /api/barbers - All barber accounts, without credential material
pub async fn list_barbers(State(state): State<AppState>) -> Result<Json<Vec<Barber>>, ApiError> {
    let rows = state.db.list_barbers().await.map_err(|e| {
        tracing::error!("Barber listing failed: {:#}", e);
        ApiError::internal("Failed to fetch barbers")
    })?;

    Ok(Json(rows.into_iter().map(Barber::from).collect()))
}

/// POST /api/admin/barbers - Create a barber account (admin only)
pub async fn create_barber(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    Json(req): Json<CreateBarberRequest>,
) -> Result<(StatusCode, Json<CreateBarberResponse>), ApiError> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request(
            "Name, email, and password are required",
        ));
    }

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!("Password hashing failed: {:#}", e);
        ApiError::internal("An error occurred while creating the barber")
    })?;

    let barber = state
        .db
        .create_barber(CreateBarberRow {
            name: req.name,
            email: req.email,
            password_hash,
            is_admin: req.is_admin,
        })
        .await
        .map_err(|e| {
            tracing::error!("Barber creation failed: {:#}", e);
            ApiError::service_unavailable("Failed to create barber")
        })?;

    tracing::info!(created_by = %admin.id, barber = %barber.id, "Barber account created");

    let store = match (req.create_store, req.store_name, req.store_slug) {
        (true, Some(store_name), Some(store_slug)) => Some(
            state
                .db
                .create_store(CreateStoreRow {
                    name: store_name,
                    slug: store_slug,
                    primary_color: req
                        .primary_color
                        .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
                    accent_color: req
                        .accent_color
                        .unwrap_or_else(|| DEFAULT_ACCENT_COLOR.to_string()),
                    barber: barber.id.clone(),
                })
                .await
                .map_err(|e| {
                    tracing::error!("Store creation failed: {:#}", e);
                    ApiError::service_unavailable("Barber created but failed to create store")
                })?,
        ),
        _ => None,
    };

    Ok((
        StatusCode::CREATED,
        Json(CreateBarberResponse {
            barber: barber.into(),
            store,
        }),
    ))
}
