// Server configuration loaded from environment variables.
// Decision: secrets are read once here and injected into constructors,
// never pulled from the environment inside business logic.

/// Fallback signing secret for local development.
/// Using it is a deliberate fail-open; `SessionConfig::from_env` logs a
/// warning so the condition is visible in monitoring.
pub const DEV_FALLBACK_SECRET: &str =
    "fallback_secret_do_not_use_in_production_please_set_SESSION_SECRET_env_var";

/// Session signing configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Symmetric secret for HS256 token signatures
    pub secret: String,
    /// Controls the `Secure` cookie attribute (off for local HTTP dev)
    pub production: bool,
}

impl SessionConfig {
    pub fn from_env(production: bool) -> Self {
        let secret = match std::env::var("SESSION_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!(
                    "SESSION_SECRET not set, using insecure development fallback secret"
                );
                DEV_FALLBACK_SECRET.to_string()
            }
        };
        Self { secret, production }
    }
}

/// Airtable backend configuration
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub token: String,
    pub base_id: String,
}

impl AirtableConfig {
    /// Returns `None` when either variable is missing, which selects the
    /// in-memory dev backend.
    pub fn from_env() -> Option<Self> {
        match (
            std::env::var("AIRTABLE_TOKEN"),
            std::env::var("AIRTABLE_BASE_ID"),
        ) {
            (Ok(token), Ok(base_id)) if !token.is_empty() && !base_id.is_empty() => {
                Some(Self { token, base_id })
            }
            _ => None,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Production deployment flag (`APP_ENV=production`)
    pub production: bool,
    pub session: SessionConfig,
    pub airtable: Option<AirtableConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let production = std::env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self {
            bind_addr,
            production,
            session: SessionConfig::from_env(production),
            airtable: AirtableConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_carries_production_flag() {
        let config = SessionConfig {
            secret: "test-secret".to_string(),
            production: true,
        };
        assert!(config.production);
    }

    #[test]
    fn test_fallback_secret_is_not_empty() {
        assert!(!DEV_FALLBACK_SECRET.is_empty());
    }
}
