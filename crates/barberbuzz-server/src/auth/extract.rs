// Session extractors for API handlers
// Decision: API endpoints answer 401 JSON instead of redirecting; the
// redirect behavior belongs to the page gate only.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use barberbuzz_core::Identity;

use super::session::SESSION_COOKIE;
use crate::{api::common::ApiError, AppState};

/// Extractor for the authenticated user; rejects with 401 when the session
/// cookie is absent or invalid
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        state
            .sessions
            .verify(jar.get(SESSION_COOKIE).map(|c| c.value()))
            .map(CurrentUser)
            .ok_or_else(|| ApiError::unauthorized("Unauthorized"))
    }
}

/// Extractor requiring an admin session
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(identity) = CurrentUser::from_request_parts(parts, state).await?;
        if !identity.is_admin {
            return Err(ApiError::unauthorized("Unauthorized"));
        }
        Ok(AdminUser(identity))
    }
}
