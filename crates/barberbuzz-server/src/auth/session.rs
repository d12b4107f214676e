// Session token service
// Decision: HS256 with a single symmetric secret; tokens are self-contained
// and never revocable server-side. Expiration is the only termination
// mechanism besides clearing the cookie.

use anyhow::{Context, Result};
use axum_extra::extract::cookie::{Cookie, SameSite};
use barberbuzz_core::Identity;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;

/// Cookie name used across the app
pub const SESSION_COOKIE: &str = "barberbuzz_session";

/// Fixed session lifetime
const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims for session tokens.
/// The identity fields are embedded verbatim; decoding fails closed if any
/// of them is missing or mistyped, which collapses to "no session".
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    id: String,
    name: String,
    email: String,
    #[serde(rename = "isAdmin")]
    is_admin: bool,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

/// Issues and verifies signed session tokens
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    production: bool,
}

impl SessionService {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            production: config.production,
        }
    }

    /// Mint a signed token carrying the identity, valid for 24 hours
    pub fn issue(&self, identity: &Identity) -> Result<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            is_admin: identity.is_admin,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(SESSION_TTL_SECS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .context("Failed to encode session token")
    }

    /// Verify a token and decode the identity it carries.
    ///
    /// Absent, tampered, malformed and expired tokens all come back as
    /// `None`; verification never surfaces an error to the caller.
    pub fn verify(&self, token: Option<&str>) -> Option<Identity> {
        let token = token?;

        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;

        match decode::<SessionClaims>(token, &self.decoding_key, &validation) {
            Ok(data) => Some(Identity {
                id: data.claims.id,
                name: data.claims.name,
                email: data.claims.email,
                is_admin: data.claims.is_admin,
            }),
            Err(e) => {
                tracing::debug!("Session token rejected: {}", e);
                None
            }
        }
    }

    /// Build the session cookie carrying a freshly issued token
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .secure(self.production)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(SESSION_TTL_SECS))
            .build()
    }

    /// Build the clearing cookie used on logout (empty value, Max-Age=0)
    pub fn clear_cookie(&self) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .secure(self.production)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::ZERO)
            .build()
    }
}
