// Credential verification against the record store.
// The caller can never tell an unknown email from a wrong password; both
// collapse to InvalidCredentials to prevent account enumeration.

use barberbuzz_core::Identity;
use thiserror::Error;

use super::password::verify_password;
use crate::storage::{BarberRow, StorageBackend};

/// Expected authentication failures. These are returned, never thrown
/// across the public boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password, deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The record store could not be reached; retryable (HTTP 503)
    #[error("Authentication service unavailable")]
    ServiceUnavailable,
}

/// Resolve an account lookup outcome against the supplied password.
/// Read-only: no lockout counter, no rate limiting.
fn check_credentials(
    lookup: anyhow::Result<Option<BarberRow>>,
    password: &str,
) -> Result<Identity, AuthError> {
    let barber = match lookup {
        Ok(Some(barber)) => barber,
        Ok(None) => return Err(AuthError::InvalidCredentials),
        Err(e) => {
            tracing::error!("Account lookup failed: {:#}", e);
            return Err(AuthError::ServiceUnavailable);
        }
    };

    match verify_password(password, &barber.password_hash) {
        Ok(true) => Ok(Identity::from(&barber)),
        Ok(false) => Err(AuthError::InvalidCredentials),
        Err(e) => {
            // A hash that will not parse can never match; fail closed
            tracing::error!(barber = %barber.id, "Stored password hash unusable: {:#}", e);
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Authenticate an email/password pair, yielding the account's identity
pub async fn authenticate(
    db: &StorageBackend,
    email: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    check_credentials(db.find_barber_by_email(email).await, password)
}
