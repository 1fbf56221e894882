//! Configuration module for the switchboard server
//!
//! Configuration is read from environment variables once at startup (a
//! `.env` file is honored in development). The configuration is split into
//! logical submodules for maintainability:
//!
//! # Modules
//! - `departments`: department directory and destination address types
//! - `env`: environment variable loading
//! - `validation`: configuration validation logic
//! - `utils`: utility functions for configuration parsing

pub mod departments;
mod env;
mod utils;
mod validation;

pub use departments::{Department, DepartmentDirectory, Destination};

/// Server configuration
///
/// Contains everything needed to run the switchboard server:
/// - Network settings (host, port) and the debug-logging toggle
/// - The department transfer directory
/// - The outbound SMS origin number
/// - Authentication settings
///
/// Immutable for the process lifetime; handlers receive it by reference
/// through the shared application state.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,
    pub debug: bool,

    // Telephony settings
    pub departments: DepartmentDirectory,
    pub from_number: Option<String>,

    // Authentication configuration
    pub auth_api_secret: Option<String>,
    pub auth_required: bool,
}

impl ServerConfig {
    /// Get the server address as a string in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if API secret authentication is configured
    pub fn has_api_secret_auth(&self) -> bool {
        self.auth_api_secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ServerConfig {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: false,
            departments: DepartmentDirectory::default(),
            from_number: None,
            auth_api_secret: None,
            auth_required: false,
        }
    }

    #[test]
    fn test_address() {
        let mut config = base_config();
        config.host = "127.0.0.1".to_string();
        config.port = 8080;
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_has_api_secret_auth() {
        let mut config = base_config();
        assert!(!config.has_api_secret_auth());

        config.auth_api_secret = Some("my-secret-token".to_string());
        assert!(config.has_api_secret_auth());
    }
}
