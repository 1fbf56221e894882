use std::env;

use super::ServerConfig;
use super::departments::DepartmentDirectory;
use super::utils::parse_bool;
use super::validation::{validate_auth_required, validate_from_number};

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from environment variables, with sensible
    /// defaults. Also loads from a .env file if present using dotenvy.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `PORT` is not a valid port number
    /// - Any set `TRANSFER_*` value is neither a `sip:` URI nor a `+E.164`
    ///   number
    /// - `FROM_NUMBER` is set but not E.164-shaped
    /// - `AUTH_REQUIRED` is enabled without `AUTH_API_SECRET`
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        // Server configuration
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid port number: {e}"))?;
        let debug = env::var("DEBUG")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(false);

        // Telephony configuration
        let departments = DepartmentDirectory::from_env()?;
        let from_number = env::var("FROM_NUMBER").ok().filter(|v| !v.is_empty());
        validate_from_number(&from_number)?;

        // Authentication configuration
        let auth_api_secret = env::var("AUTH_API_SECRET").ok().filter(|v| !v.is_empty());
        let auth_required = env::var("AUTH_REQUIRED")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(false);
        validate_auth_required(auth_required, &auth_api_secret)?;

        Ok(ServerConfig {
            host,
            port,
            debug,
            departments,
            from_number,
            auth_api_secret,
            auth_required,
        })
    }
}
