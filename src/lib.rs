pub mod config;
pub mod docs;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod swaig;
pub mod swml;

// Re-export commonly used items for convenience
pub use config::ServerConfig;
pub use config::departments::{Department, DepartmentDirectory, Destination};
pub use errors::app_error::{AppError, AppResult};
pub use errors::auth_error::{AuthError, AuthResult};
pub use state::AppState;
