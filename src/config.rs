//! Application configuration loaded from environment variables.
//!
//! The JWT secret is read once here and handed to `JetonService` at
//! construction; nothing else in the codebase touches the environment
//! for it.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID for Firestore
    pub gcp_project_id: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// JWT signing secret (raw bytes). Required: startup fails without it.
    pub jwt_secret: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `JWT_SECRET` is a fatal configuration error, not a
    /// per-request one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET"))?
                .into_bytes(),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            jwt_secret: b"test_jwt_secret_32_bytes_minimum".to_vec(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: env vars are process-wide, so the present/absent cases
    // must run in order.
    #[test]
    fn test_config_from_env() {
        env::remove_var("JWT_SECRET");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("JWT_SECRET")));

        env::set_var("JWT_SECRET", "test_jwt_secret_32_bytes_minimum");
        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.jwt_secret, b"test_jwt_secret_32_bytes_minimum");
        assert_eq!(config.port, 8080);
    }
}
